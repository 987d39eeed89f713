//! ViewModel da página de detalhes
//!
//! Guarda o roteiro original do servidor e troca o texto exibido pela
//! tradução pedida. Traduções já recebidas ficam em cache na página; a
//! chave combina o idioma e o tamanho do texto original.

use std::collections::HashMap;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::page_context::page_data;
use crate::shared::toast::{use_toast, ToastService};

/// Idiomas oferecidos no seletor, além do português original
pub const IDIOMAS: [(&str, &str); 4] = [
    ("pt", "Português"),
    ("en", "English"),
    ("es", "Español"),
    ("fr", "Français"),
];

#[derive(Clone, Copy)]
pub struct DetalheViewModel {
    toast: ToastService,
    csrf_token: &'static str,
    url_traducao: &'static str,

    /// Texto como veio do servidor; nunca muda
    original: RwSignal<String>,
    pub texto: RwSignal<String>,
    pub idioma: RwSignal<String>,
    pub traduzindo: RwSignal<bool>,
    pub copiado: RwSignal<bool>,
    cache: RwSignal<HashMap<String, String>>,
}

impl DetalheViewModel {
    pub fn new() -> Self {
        let dados = page_data();
        let original = dados.roteiro.clone().unwrap_or_default();

        Self {
            toast: use_toast(),
            csrf_token: &dados.csrf_token,
            url_traducao: &dados.urls.traducao,
            original: RwSignal::new(original.clone()),
            texto: RwSignal::new(original),
            idioma: RwSignal::new("pt".to_string()),
            traduzindo: RwSignal::new(false),
            copiado: RwSignal::new(false),
            cache: RwSignal::new(HashMap::new()),
        }
    }

    /// Copia o texto exibido e troca o rótulo do botão por dois segundos
    pub fn copiar(&self) {
        let texto = self.texto.get_untracked();
        let copiado = self.copiado;

        copy_to_clipboard_with_callback(&texto, move || {
            copiado.set(true);
            spawn_local(async move {
                TimeoutFuture::new(2000).await;
                copiado.set(false);
            });
        });
    }

    pub fn ao_mudar_idioma(&self) {
        let idioma = self.idioma.get_untracked();
        let original = self.original.get_untracked();

        if idioma == "pt" {
            self.texto.set(original);
            return;
        }

        let chave = format!("{}_{}", idioma, original.len());
        if let Some(traduzido) = self.cache.with_untracked(|c| c.get(&chave).cloned()) {
            self.texto.set(traduzido);
            return;
        }

        let this = *self;
        this.traduzindo.set(true);
        spawn_local(async move {
            let resultado =
                model::traduzir(this.url_traducao, this.csrf_token, &original, &idioma).await;
            this.traduzindo.set(false);
            match resultado {
                Ok(traduzido) => {
                    this.cache.update(|c| {
                        c.insert(chave, traduzido.clone());
                    });
                    this.texto.set(traduzido);
                }
                Err(e) => {
                    log::error!("{}", e);
                    this.toast.erro(format!("Falha na tradução: {}", e));
                    // erro restaura o original e volta o seletor
                    this.texto.set(original);
                    this.idioma.set("pt".to_string());
                }
            }
        });
    }
}
