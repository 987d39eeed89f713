use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use web_sys::HtmlInputElement;

use super::view_model::EmpresaViewModel;

const UFS: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB",
    "PR", "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

/// Formulário de dados da empresa, enviado como POST multipart nativo
#[component]
pub fn EmpresaForm() -> impl IntoView {
    let vm = EmpresaViewModel::new();

    let ao_enviar = move |ev: SubmitEvent| {
        if !vm.pode_enviar() {
            ev.prevent_default();
        }
    };

    view! {
        <form
            method="post"
            action=vm.url_submit
            enctype="multipart/form-data"
            on:submit=ao_enviar
        >
            <input type="hidden" name="csrfmiddlewaretoken" value=vm.csrf_token() />

            <div class="card mb-3">
                <div class="card-header">
                    <i class="bi bi-building me-2"></i>
                    "Dados da Empresa"
                </div>
                <div class="card-body">
                    <div class="row g-3">
                        <div class="col-md-8">
                            <label class="form-label">"Razão Social *"</label>
                            <input
                                type="text"
                                class="form-control"
                                name="razao_social"
                                prop:value=move || vm.razao_social.get()
                                on:input=move |ev| vm.razao_social.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="col-md-4">
                            <label class="form-label">"CNPJ/CPF *"</label>
                            <div class="input-group">
                                <input
                                    type="text"
                                    class=move || {
                                        match vm.documento_valido.get() {
                                            Some(true) => "form-control is-valid",
                                            Some(false) => "form-control is-invalid",
                                            None => "form-control",
                                        }
                                    }
                                    name="cnpj_cpf"
                                    prop:value=move || vm.cnpj_cpf.get()
                                    on:input=move |ev| {
                                        vm.ao_digitar_documento(event_target_value(&ev))
                                    }
                                />
                                <button
                                    type="button"
                                    class="btn btn-outline-secondary"
                                    on:click=move |_| vm.validar_documento()
                                >
                                    "Validar"
                                </button>
                            </div>
                        </div>
                        <div class="col-md-4">
                            <label class="form-label">"Telefone"</label>
                            <input
                                type="text"
                                class="form-control"
                                name="telefone"
                                prop:value=move || vm.telefone.get()
                                on:input=move |ev| vm.ao_digitar_telefone(event_target_value(&ev))
                            />
                        </div>
                        <div class="col-md-8">
                            <label class="form-label">"E-mail *"</label>
                            <input
                                type="email"
                                class="form-control"
                                name="email"
                                prop:value=move || vm.email.get()
                                on:input=move |ev| vm.email.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                </div>
            </div>

            <div class="card mb-3">
                <div class="card-header">
                    <i class="bi bi-geo-alt me-2"></i>
                    "Endereço"
                </div>
                <div class="card-body">
                    <div class="row g-3">
                        <div class="col-md-3">
                            <label class="form-label">"CEP"</label>
                            <div class="input-group">
                                <input
                                    type="text"
                                    id="cep"
                                    class="form-control"
                                    name="cep"
                                    prop:value=move || vm.cep.get()
                                    on:input=move |ev| vm.ao_digitar_cep(event_target_value(&ev))
                                    on:keydown=move |ev| {
                                        if ev.key() == "Enter" {
                                            ev.prevent_default();
                                            vm.buscar_cep_agora();
                                        }
                                    }
                                />
                                <button
                                    type="button"
                                    class="btn btn-outline-secondary"
                                    disabled=move || vm.buscando_cep.get()
                                    on:click=move |_| vm.buscar_cep_agora()
                                >
                                    {move || {
                                        if vm.buscando_cep.get() {
                                            view! {
                                                <span>
                                                    <span class="spinner-border spinner-border-sm me-1"></span>
                                                    "Buscando..."
                                                </span>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <span>
                                                    <i class="bi bi-search me-1"></i>
                                                    "Buscar"
                                                </span>
                                            }
                                                .into_any()
                                        }
                                    }}
                                </button>
                            </div>
                        </div>
                        <div class="col-md-7">
                            <label class="form-label">"Logradouro"</label>
                            <input
                                type="text"
                                class="form-control"
                                name="logradouro"
                                prop:value=move || vm.logradouro.get()
                                on:input=move |ev| vm.logradouro.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="col-md-2">
                            <label class="form-label">"Número"</label>
                            <input
                                type="text"
                                id="numero"
                                class="form-control"
                                name="numero"
                                prop:value=move || vm.numero.get()
                                on:input=move |ev| vm.numero.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="col-md-5">
                            <label class="form-label">"Bairro"</label>
                            <input
                                type="text"
                                class="form-control"
                                name="bairro"
                                prop:value=move || vm.bairro.get()
                                on:input=move |ev| vm.bairro.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="col-md-5">
                            <label class="form-label">"Cidade"</label>
                            <input
                                type="text"
                                class="form-control"
                                name="cidade"
                                prop:value=move || vm.cidade.get()
                                on:input=move |ev| vm.cidade.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="col-md-2">
                            <label class="form-label">"UF"</label>
                            <select
                                class="form-select"
                                name="uf"
                                prop:value=move || vm.uf.get()
                                on:change=move |ev| vm.uf.set(event_target_value(&ev))
                            >
                                <option value="">"--"</option>
                                {UFS
                                    .iter()
                                    .map(|uf| view! { <option value=*uf>{*uf}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                    </div>
                </div>
            </div>

            <div class="card mb-3">
                <div class="card-header">
                    <i class="bi bi-image me-2"></i>
                    "Logo"
                </div>
                <div class="card-body">
                    <input
                        type="file"
                        class="form-control"
                        name="logo"
                        accept="image/jpeg,image/png,image/gif,image/webp"
                        on:change=move |ev| {
                            let input: HtmlInputElement = event_target(&ev);
                            let arquivo = input.files().and_then(|lista| lista.get(0));
                            match arquivo {
                                Some(arquivo) => vm.ao_escolher_logo(arquivo),
                                None => vm.logo_preview.set(None),
                            }
                        }
                    />
                    <input
                        type="checkbox"
                        name="logo-clear"
                        class="d-none"
                        prop:checked=move || vm.limpar_logo.get()
                    />
                    {move || {
                        let imagem = vm.logo_preview.get().or_else(|| vm.logo_atual.get());
                        imagem
                            .map(|src| {
                                view! {
                                    <div class="d-flex align-items-center gap-3 mt-3">
                                        <img src=src alt="Logo" class="logo-preview" />
                                        <button
                                            type="button"
                                            class="btn btn-sm btn-outline-danger"
                                            on:click=move |_| vm.remover_logo()
                                        >
                                            <i class="bi bi-trash me-1"></i>
                                            "Remover Logo"
                                        </button>
                                    </div>
                                }
                            })
                    }}
                </div>
            </div>

            <div class="d-flex justify-content-end">
                <button type="submit" class="btn btn-success">
                    <i class="bi bi-check-lg me-1"></i>
                    "Salvar Alterações"
                </button>
            </div>
        </form>
    }
}
