//! Formulário de subcategoria de serviço
//!
//! Quatro grupos de campos condicionais controlados por checkbox. Ao
//! desmarcar um grupo, os campos voltam aos valores padrão para o
//! servidor não receber restos de uma configuração abandonada.

use leptos::prelude::*;

/// Valores padrão de cada grupo ao ser desativado
const VALOR_ZERADO: &str = "0.00";
const IDADE_ZERO: &str = "0";
const IDADE_MAXIMA_INFANTIL_PADRAO: &str = "17";

#[component]
pub fn SubcategoriaForm() -> impl IntoView {
    let aceita_meia = RwSignal::new(false);
    let valor_meia = RwSignal::new(VALOR_ZERADO.to_string());
    let regras_meia = RwSignal::new(String::new());

    let permite_infantil = RwSignal::new(false);
    let valor_infantil = RwSignal::new(VALOR_ZERADO.to_string());
    let idade_minima_infantil = RwSignal::new(IDADE_ZERO.to_string());
    let idade_maxima_infantil = RwSignal::new(IDADE_MAXIMA_INFANTIL_PADRAO.to_string());

    let possui_isencao = RwSignal::new(false);
    let idade_isencao_min = RwSignal::new(IDADE_ZERO.to_string());
    let idade_isencao_max = RwSignal::new(IDADE_ZERO.to_string());
    let texto_isencao = RwSignal::new(String::new());

    let tem_idade_minima = RwSignal::new(false);
    let idade_minima = RwSignal::new(IDADE_ZERO.to_string());

    let ao_mudar_meia = move |ativo: bool| {
        aceita_meia.set(ativo);
        if !ativo {
            valor_meia.set(VALOR_ZERADO.to_string());
            regras_meia.set(String::new());
        }
    };
    let ao_mudar_infantil = move |ativo: bool| {
        permite_infantil.set(ativo);
        if !ativo {
            valor_infantil.set(VALOR_ZERADO.to_string());
            idade_minima_infantil.set(IDADE_ZERO.to_string());
            idade_maxima_infantil.set(IDADE_MAXIMA_INFANTIL_PADRAO.to_string());
        }
    };
    let ao_mudar_isencao = move |ativo: bool| {
        possui_isencao.set(ativo);
        if !ativo {
            idade_isencao_min.set(IDADE_ZERO.to_string());
            idade_isencao_max.set(IDADE_ZERO.to_string());
            texto_isencao.set(String::new());
        }
    };
    let ao_mudar_idade_minima = move |ativo: bool| {
        tem_idade_minima.set(ativo);
        if !ativo {
            idade_minima.set(IDADE_ZERO.to_string());
        }
    };

    view! {
        <div class="subcategoria-form">
            <div class="form-check mb-2">
                <input
                    type="checkbox"
                    class="form-check-input"
                    id="aceita_meia_entrada"
                    name="aceita_meia_entrada"
                    prop:checked=move || aceita_meia.get()
                    on:change=move |ev| ao_mudar_meia(event_target_checked(&ev))
                />
                <label class="form-check-label" for="aceita_meia_entrada">
                    "Aceita meia entrada"
                </label>
            </div>
            <Show when=move || aceita_meia.get()>
                <div class="border rounded p-3 mb-3">
                    <div class="row g-3">
                        <div class="col-md-4">
                            <label class="form-label">"Valor da Meia"</label>
                            <input
                                type="number"
                                step="0.01"
                                min="0"
                                class="form-control"
                                name="valor_meia"
                                prop:value=move || valor_meia.get()
                                on:input=move |ev| valor_meia.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="col-md-8">
                            <label class="form-label">"Regras da Meia Entrada"</label>
                            <textarea
                                class="form-control"
                                rows="2"
                                name="regras_meia_entrada"
                                prop:value=move || regras_meia.get()
                                on:input=move |ev| regras_meia.set(event_target_value(&ev))
                            ></textarea>
                        </div>
                    </div>
                </div>
            </Show>

            <div class="form-check mb-2">
                <input
                    type="checkbox"
                    class="form-check-input"
                    id="permite_infantil"
                    name="permite_infantil"
                    prop:checked=move || permite_infantil.get()
                    on:change=move |ev| ao_mudar_infantil(event_target_checked(&ev))
                />
                <label class="form-check-label" for="permite_infantil">
                    "Permite valor infantil"
                </label>
            </div>
            <Show when=move || permite_infantil.get()>
                <div class="border rounded p-3 mb-3">
                    <div class="row g-3">
                        <div class="col-md-4">
                            <label class="form-label">"Valor Infantil"</label>
                            <input
                                type="number"
                                step="0.01"
                                min="0"
                                class="form-control"
                                name="valor_infantil"
                                prop:value=move || valor_infantil.get()
                                on:input=move |ev| valor_infantil.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="col-md-4">
                            <label class="form-label">"Idade Mínima"</label>
                            <input
                                type="number"
                                min="0"
                                class="form-control"
                                name="idade_minima_infantil"
                                prop:value=move || idade_minima_infantil.get()
                                on:input=move |ev| {
                                    idade_minima_infantil.set(event_target_value(&ev))
                                }
                            />
                        </div>
                        <div class="col-md-4">
                            <label class="form-label">"Idade Máxima"</label>
                            <input
                                type="number"
                                min="0"
                                class="form-control"
                                name="idade_maxima_infantil"
                                prop:value=move || idade_maxima_infantil.get()
                                on:input=move |ev| {
                                    idade_maxima_infantil.set(event_target_value(&ev))
                                }
                            />
                        </div>
                    </div>
                </div>
            </Show>

            <div class="form-check mb-2">
                <input
                    type="checkbox"
                    class="form-check-input"
                    id="possui_isencao"
                    name="possui_isencao"
                    prop:checked=move || possui_isencao.get()
                    on:change=move |ev| ao_mudar_isencao(event_target_checked(&ev))
                />
                <label class="form-check-label" for="possui_isencao">
                    "Possui faixa de isenção"
                </label>
            </div>
            <Show when=move || possui_isencao.get()>
                <div class="border rounded p-3 mb-3">
                    <div class="row g-3">
                        <div class="col-md-3">
                            <label class="form-label">"Idade Mínima da Isenção"</label>
                            <input
                                type="number"
                                min="0"
                                class="form-control"
                                name="idade_isencao_min"
                                prop:value=move || idade_isencao_min.get()
                                on:input=move |ev| idade_isencao_min.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="col-md-3">
                            <label class="form-label">"Idade Máxima da Isenção"</label>
                            <input
                                type="number"
                                min="0"
                                class="form-control"
                                name="idade_isencao_max"
                                prop:value=move || idade_isencao_max.get()
                                on:input=move |ev| idade_isencao_max.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="col-md-6">
                            <label class="form-label">"Texto da Isenção"</label>
                            <input
                                type="text"
                                class="form-control"
                                name="texto_isencao"
                                placeholder="Ex.: Crianças até 4 anos não pagam"
                                prop:value=move || texto_isencao.get()
                                on:input=move |ev| texto_isencao.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                </div>
            </Show>

            <div class="form-check mb-2">
                <input
                    type="checkbox"
                    class="form-check-input"
                    id="tem_idade_minima"
                    name="tem_idade_minima"
                    prop:checked=move || tem_idade_minima.get()
                    on:change=move |ev| ao_mudar_idade_minima(event_target_checked(&ev))
                />
                <label class="form-check-label" for="tem_idade_minima">
                    "Exige idade mínima"
                </label>
            </div>
            <Show when=move || tem_idade_minima.get()>
                <div class="border rounded p-3 mb-3">
                    <div class="col-md-3">
                        <label class="form-label">"Idade Mínima"</label>
                        <input
                            type="number"
                            min="0"
                            class="form-control"
                            name="idade_minima"
                            prop:value=move || idade_minima.get()
                            on:input=move |ev| idade_minima.set(event_target_value(&ev))
                        />
                    </div>
                </div>
            </Show>
        </div>
    }
}
