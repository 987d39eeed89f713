//! Notificações toast
//!
//! Serviço centralizado de notificações fornecido via contexto, no
//! lugar dos `alert()` bloqueantes: cada chamada empilha um toast no
//! canto superior direito que se auto-dispensa depois de alguns
//! segundos.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Tempo de exibição de cada toast, em milissegundos
const DURACAO_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipoToast {
    Sucesso,
    Erro,
    Aviso,
}

impl TipoToast {
    fn classe(&self) -> &'static str {
        match self {
            TipoToast::Sucesso => "text-bg-success",
            TipoToast::Erro => "text-bg-danger",
            TipoToast::Aviso => "text-bg-warning",
        }
    }

    fn icone(&self) -> &'static str {
        match self {
            TipoToast::Sucesso => "bi-check-circle",
            TipoToast::Erro => "bi-x-circle",
            TipoToast::Aviso => "bi-exclamation-triangle",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    id: u64,
    mensagem: String,
    tipo: TipoToast,
}

/// Serviço de notificações, fornecido via contexto no topo do app
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    proximo_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            proximo_id: RwSignal::new(1),
        }
    }

    pub fn show(&self, mensagem: impl Into<String>, tipo: TipoToast) {
        let id = self.proximo_id.get_untracked();
        self.proximo_id.set(id + 1);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                mensagem: mensagem.into(),
                tipo,
            })
        });

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(DURACAO_MS).await;
            toasts.update(|lista| lista.retain(|t| t.id != id));
        });
    }

    pub fn sucesso(&self, mensagem: impl Into<String>) {
        self.show(mensagem, TipoToast::Sucesso);
    }

    pub fn erro(&self, mensagem: impl Into<String>) {
        self.show(mensagem, TipoToast::Erro);
    }

    pub fn aviso(&self, mensagem: impl Into<String>) {
        self.show(mensagem, TipoToast::Aviso);
    }

    fn dispensar(&self, id: u64) {
        self.toasts.update(|lista| lista.retain(|t| t.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Obtém o serviço de toasts do contexto
pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService não fornecido no contexto")
}

/// Container fixo que renderiza a pilha de toasts ativa
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toast();

    view! {
        <div
            class="toast-container position-fixed top-0 end-0 p-3"
            style="z-index: 9999;"
        >
            <For
                each=move || service.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!(
                            "toast align-items-center border-0 show {}",
                            toast.tipo.classe(),
                        )>
                            <div class="d-flex">
                                <div class="toast-body">
                                    <i class=format!("bi {} me-2", toast.tipo.icone())></i>
                                    {toast.mensagem.clone()}
                                </div>
                                <button
                                    type="button"
                                    class="btn-close btn-close-white me-2 m-auto"
                                    on:click=move |_| service.dispensar(id)
                                ></button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
