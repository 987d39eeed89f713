//! ViewModel do formulário de dados da empresa
//!
//! Consulta de CEP com preenchimento automático do endereço, validação
//! de CNPJ/CPF e validação/preview da logo. O envio do formulário é um
//! POST nativo; o ViewModel só barra o envio quando faltam campos
//! obrigatórios.

use contracts::domain::empresa::validar_logo;
use contracts::shared::format::{formatar_cep, formatar_cnpj, formatar_cpf, formatar_telefone};
use contracts::shared::validation::{validar_cep, validar_cnpj, validar_cpf, validar_email};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::model;
use crate::shared::page_context::page_data;
use crate::shared::toast::{use_toast, ToastService};

#[derive(Clone, Copy)]
pub struct EmpresaViewModel {
    toast: ToastService,
    csrf_token: &'static str,
    url_cep: &'static str,
    pub url_submit: &'static str,

    pub razao_social: RwSignal<String>,
    pub cnpj_cpf: RwSignal<String>,
    /// `None` antes da primeira validação explícita
    pub documento_valido: RwSignal<Option<bool>>,
    pub cep: RwSignal<String>,
    pub logradouro: RwSignal<String>,
    pub numero: RwSignal<String>,
    pub bairro: RwSignal<String>,
    pub cidade: RwSignal<String>,
    pub uf: RwSignal<String>,
    pub telefone: RwSignal<String>,
    pub email: RwSignal<String>,

    pub buscando_cep: RwSignal<bool>,
    /// Invalida buscas automáticas agendadas quando o CEP muda de novo
    geracao_cep: RwSignal<u64>,

    /// Logo já salva no servidor
    pub logo_atual: RwSignal<Option<String>>,
    /// Data-URL da logo recém escolhida, exibida como preview
    pub logo_preview: RwSignal<Option<String>>,
    /// Marca a logo atual para remoção no envio
    pub limpar_logo: RwSignal<bool>,
}

impl EmpresaViewModel {
    pub fn new() -> Self {
        let dados = page_data();
        let empresa = dados.empresa.clone().unwrap_or_default();

        Self {
            toast: use_toast(),
            csrf_token: &dados.csrf_token,
            url_cep: &dados.urls.validar_cep,
            url_submit: &dados.urls.empresa_submit,
            razao_social: RwSignal::new(empresa.razao_social),
            cnpj_cpf: RwSignal::new(empresa.cnpj_cpf),
            documento_valido: RwSignal::new(None),
            cep: RwSignal::new(empresa.cep),
            logradouro: RwSignal::new(empresa.logradouro),
            numero: RwSignal::new(empresa.numero),
            bairro: RwSignal::new(empresa.bairro),
            cidade: RwSignal::new(empresa.cidade),
            uf: RwSignal::new(empresa.uf),
            telefone: RwSignal::new(empresa.telefone),
            email: RwSignal::new(empresa.email),
            buscando_cep: RwSignal::new(false),
            geracao_cep: RwSignal::new(0),
            logo_atual: RwSignal::new(empresa.logo_url),
            logo_preview: RwSignal::new(None),
            limpar_logo: RwSignal::new(false),
        }
    }

    pub fn csrf_token(&self) -> &'static str {
        self.csrf_token
    }

    // ----- CEP -----

    /// Aplica a máscara e agenda a busca automática quando o CEP
    /// completa oito dígitos
    pub fn ao_digitar_cep(&self, valor: String) {
        let digitos: String = valor.chars().filter(|c| c.is_ascii_digit()).collect();
        self.cep.set(formatar_cep(&digitos));

        let geracao = self.geracao_cep.get_untracked() + 1;
        self.geracao_cep.set(geracao);

        if digitos.len() != 8 {
            return;
        }

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(500).await;
            // o usuário pode ter alterado o campo durante a espera
            if this.geracao_cep.get_untracked() == geracao {
                this.buscar_cep().await;
            }
        });
    }

    pub fn buscar_cep_agora(&self) {
        let this = *self;
        spawn_local(async move {
            this.buscar_cep().await;
        });
    }

    async fn buscar_cep(&self) {
        let digitos: String = self
            .cep
            .get_untracked()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();

        if !validar_cep(&digitos) {
            self.toast.aviso("Digite um CEP válido com 8 dígitos.");
            focar("cep");
            return;
        }
        if self.buscando_cep.get_untracked() {
            return;
        }

        self.buscando_cep.set(true);
        let resultado = model::consultar_cep(self.url_cep, self.csrf_token, &digitos).await;
        self.buscando_cep.set(false);

        match resultado {
            Ok(resposta) if resposta.success => {
                if let Some(logradouro) = resposta.logradouro {
                    self.logradouro.set(logradouro);
                }
                if let Some(bairro) = resposta.bairro {
                    self.bairro.set(bairro);
                }
                if let Some(cidade) = resposta.localidade {
                    self.cidade.set(cidade);
                }
                if let Some(uf) = resposta.uf {
                    self.uf.set(uf);
                }
                self.toast.sucesso("Endereço preenchido automaticamente!");
                focar("numero");
            }
            Ok(resposta) => {
                self.toast.aviso(resposta.error.unwrap_or_else(|| {
                    "CEP não encontrado. Verifique o CEP digitado.".to_string()
                }));
            }
            Err(e) => {
                log::error!("{}", e);
                self.toast.erro(e);
            }
        }
    }

    // ----- CNPJ/CPF -----

    /// Máscara de CPF até onze dígitos, de CNPJ a partir do décimo segundo
    pub fn ao_digitar_documento(&self, valor: String) {
        let digitos: String = valor.chars().filter(|c| c.is_ascii_digit()).collect();
        let mascarado = if digitos.len() <= 11 {
            formatar_cpf(&digitos)
        } else {
            formatar_cnpj(&digitos)
        };
        self.cnpj_cpf.set(mascarado);
        self.documento_valido.set(None);
    }

    pub fn validar_documento(&self) {
        let documento = self.cnpj_cpf.get_untracked();
        if documento.trim().is_empty() {
            self.toast.aviso("Digite um CNPJ/CPF para validar.");
            return;
        }

        let digitos: String = documento.chars().filter(|c| c.is_ascii_digit()).collect();
        let valido = match digitos.len() {
            11 => validar_cpf(&digitos),
            14 => validar_cnpj(&digitos),
            _ => false,
        };

        self.documento_valido.set(Some(valido));
        if valido {
            self.toast.sucesso("CNPJ/CPF válido!");
        } else {
            self.toast
                .aviso("CNPJ/CPF inválido. Verifique o número digitado.");
        }
    }

    pub fn ao_digitar_telefone(&self, valor: String) {
        let digitos: String = valor.chars().filter(|c| c.is_ascii_digit()).collect();
        self.telefone.set(formatar_telefone(&digitos));
    }

    // ----- logo -----

    pub fn ao_escolher_logo(&self, arquivo: web_sys::File) {
        if let Err(erro) = validar_logo(&arquivo.type_(), arquivo.size() as u64) {
            self.toast.erro(erro);
            self.logo_preview.set(None);
            return;
        }

        // nova logo cancela uma remoção pendente
        self.limpar_logo.set(false);

        let Ok(reader) = web_sys::FileReader::new() else {
            return;
        };
        let preview = self.logo_preview;
        let leitor = reader.clone();
        let ao_carregar = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
            if let Ok(resultado) = leitor.result() {
                if let Some(data_url) = resultado.as_string() {
                    preview.set(Some(data_url));
                }
            }
        }) as Box<dyn FnMut(web_sys::ProgressEvent)>);
        reader.set_onload(Some(ao_carregar.as_ref().unchecked_ref()));
        ao_carregar.forget();

        if reader.read_as_data_url(&arquivo).is_err() {
            log::error!("falha ao ler o arquivo de logo");
        }
    }

    pub fn remover_logo(&self) {
        self.limpar_logo.set(true);
        self.logo_preview.set(None);
        self.logo_atual.set(None);
    }

    // ----- envio -----

    /// Checagem de obrigatórios antes do POST nativo; devolve `false`
    /// para o manipulador de submit cancelar o envio
    pub fn pode_enviar(&self) -> bool {
        let obrigatorios = [
            self.razao_social.get_untracked(),
            self.cnpj_cpf.get_untracked(),
            self.email.get_untracked(),
        ];
        if obrigatorios.iter().any(|campo| campo.trim().is_empty()) {
            self.toast
                .aviso("Por favor, preencha todos os campos obrigatórios.");
            return false;
        }
        if !validar_email(self.email.get_untracked().trim()) {
            self.toast.aviso("Informe um e-mail válido.");
            return false;
        }
        true
    }
}

fn focar(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(elemento) = document.get_element_by_id(id) {
        if let Ok(elemento) = elemento.dyn_into::<HtmlElement>() {
            let _ = elemento.focus();
        }
    }
}
