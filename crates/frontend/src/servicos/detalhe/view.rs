use leptos::prelude::*;

use super::view_model::{DetalheViewModel, IDIOMAS};

/// Painel de roteiro da página de detalhes, com cópia e tradução
#[component]
pub fn OrdemServicoDetalhe() -> impl IntoView {
    let vm = DetalheViewModel::new();

    view! {
        <div class="card">
            <div class="card-header d-flex justify-content-between align-items-center">
                <span>
                    <i class="bi bi-map me-2"></i>
                    "Roteiro"
                </span>
                <div class="d-flex align-items-center gap-2">
                    <select
                        class="form-select form-select-sm w-auto"
                        disabled=move || vm.traduzindo.get()
                        prop:value=move || vm.idioma.get()
                        on:change=move |ev| {
                            vm.idioma.set(event_target_value(&ev));
                            vm.ao_mudar_idioma();
                        }
                    >
                        {IDIOMAS
                            .iter()
                            .map(|(codigo, nome)| {
                                view! { <option value=*codigo>{*nome}</option> }
                            })
                            .collect_view()}
                    </select>
                    <button
                        type="button"
                        class=move || {
                            if vm.copiado.get() {
                                "btn btn-sm btn-secondary"
                            } else {
                                "btn btn-sm btn-success"
                            }
                        }
                        disabled=move || vm.copiado.get()
                        on:click=move |_| vm.copiar()
                    >
                        {move || {
                            if vm.copiado.get() {
                                view! {
                                    <span>
                                        <i class="bi bi-check-lg me-1"></i>
                                        "Copiado!"
                                    </span>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <span>
                                        <i class="bi bi-clipboard me-1"></i>
                                        "Copiar Roteiro"
                                    </span>
                                }
                                    .into_any()
                            }
                        }}
                    </button>
                </div>
            </div>
            <div class="card-body">
                <Show when=move || vm.traduzindo.get()>
                    <div class="text-muted small mb-2">
                        <span class="spinner-border spinner-border-sm me-1"></span>
                        "Traduzindo..."
                    </div>
                </Show>
                <pre class="roteiro-preview mb-0">{move || vm.texto.get()}</pre>
            </div>
        </div>
    }
}
