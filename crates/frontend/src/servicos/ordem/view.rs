use contracts::domain::servico::faixas_precos;
use contracts::shared::format::{formatar_data_br, formatar_moeda};
use leptos::prelude::*;

use super::view_model::OrdemServicoViewModel;

/// Formulário de ordem de serviço com múltiplos serviços por ordem
#[component]
pub fn OrdemServicoForm() -> impl IntoView {
    let vm = OrdemServicoViewModel::new();

    view! {
        <div class="ordem-servico-form">
            <FormularioServico vm=vm />
            <ListaServicos vm=vm />
            <div class="row mt-3">
                <div class="col-lg-7">
                    <RoteiroPreview vm=vm />
                </div>
                <div class="col-lg-5">
                    <ResumoValores vm=vm />
                </div>
            </div>
            <div class="d-flex justify-content-end gap-2 mt-3">
                <button
                    type="button"
                    class="btn btn-success"
                    disabled=move || vm.salvando.get()
                    on:click=move |_| vm.salvar()
                >
                    {move || {
                        if vm.salvando.get() { "Salvando..." } else { "Salvar Ordem de Serviço" }
                    }}
                </button>
            </div>
        </div>
    }
}

#[component]
fn FormularioServico(vm: OrdemServicoViewModel) -> impl IntoView {
    view! {
        <div class="card mb-3">
            <div class="card-header">
                <i class="bi bi-plus-circle me-2"></i>
                {move || {
                    if vm.editando_id.get().is_some() {
                        "Editar Serviço"
                    } else {
                        "Adicionar Serviço"
                    }
                }}
            </div>
            <div class="card-body">
                <div class="row g-3">
                    <div class="col-md-3">
                        <label class="form-label">"Data do Serviço"</label>
                        <input
                            type="date"
                            class="form-control"
                            prop:value=move || vm.data_servico.get()
                            on:input=move |ev| vm.data_servico.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="col-md-4">
                        <label class="form-label">"Categoria"</label>
                        <select
                            class="form-select"
                            prop:value=move || vm.categoria_id.get()
                            on:change=move |ev| {
                                vm.categoria_id.set(event_target_value(&ev));
                                vm.ao_mudar_categoria();
                            }
                        >
                            <option value="">"Selecione uma categoria"</option>
                            {vm.categorias()
                                .into_iter()
                                .map(|categoria| {
                                    view! {
                                        <option value=categoria.id.clone()>{categoria.nome}</option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="col-md-5">
                        <label class="form-label">"Serviço"</label>
                        <select
                            class="form-select"
                            prop:value=move || vm.servico_id.get()
                            on:change=move |ev| {
                                vm.servico_id.set(event_target_value(&ev));
                                vm.ao_mudar_servico();
                            }
                        >
                            <option value="">"Selecione um serviço"</option>
                            <For
                                each=move || vm.servicos.get()
                                key=|servico| servico.id.clone()
                                children=move |servico| {
                                    view! {
                                        <option value=servico.id.clone()>{servico.nome.clone()}</option>
                                    }
                                }
                            />
                        </select>
                    </div>
                </div>

                <Show when=move || vm.mostrar_campos.get()>
                    <RegrasServico vm=vm />
                    <Quantidades vm=vm />
                    <CamposIdades vm=vm />
                    <CamposTiposMeia vm=vm />
                    <Transfers vm=vm />

                    <div class="mt-3">
                        <label class="form-label">"Descrição"</label>
                        <textarea
                            class="form-control"
                            rows="2"
                            placeholder="Gerada automaticamente se vazia"
                            prop:value=move || vm.descricao.get()
                            on:input=move |ev| vm.descricao.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <div class="d-flex gap-2 mt-3">
                        <button
                            type="button"
                            class="btn btn-primary"
                            on:click=move |_| vm.adicionar_servico()
                        >
                            <i class="bi bi-plus-lg me-1"></i>
                            {move || {
                                if vm.editando_id.get().is_some() {
                                    "Atualizar Serviço"
                                } else {
                                    "Adicionar Serviço"
                                }
                            }}
                        </button>
                        <button
                            type="button"
                            class="btn btn-outline-secondary"
                            on:click=move |_| vm.limpar_formulario(true)
                        >
                            "Limpar"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}

/// Legenda de regras do serviço selecionado, com a tabela de faixas
#[component]
fn RegrasServico(vm: OrdemServicoViewModel) -> impl IntoView {
    view! {
        {move || {
            vm.servico_info
                .get()
                .map(|info| {
                    let faixas = faixas_precos(&info);
                    let texto_isencao = info.texto_isencao.clone().unwrap_or_default();
                    view! {
                        <div class="alert alert-light border mt-3">
                            <h6 class="mb-2">
                                <i class="bi bi-info-circle me-1"></i>
                                "Resumo de Faixas Etárias"
                            </h6>
                            <table class="table table-sm mb-1">
                                <thead>
                                    <tr>
                                        <th>"Faixa"</th>
                                        <th>"Idade"</th>
                                        <th>"Valor"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {faixas
                                        .into_iter()
                                        .map(|faixa| {
                                            view! {
                                                <tr class=faixa.classe>
                                                    <td>{faixa.nome}</td>
                                                    <td>{faixa.idade}</td>
                                                    <td>{faixa.valor}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                            <Show when={
                                let texto = texto_isencao.clone();
                                move || !texto.is_empty()
                            }>
                                <small class="text-muted">{texto_isencao.clone()}</small>
                            </Show>
                        </div>
                    }
                })
        }}
    }
}

#[component]
fn Quantidades(vm: OrdemServicoViewModel) -> impl IntoView {
    let aceita_meia = move || {
        vm.servico_info
            .get()
            .map(|info| info.aceita_meia_entrada)
            .unwrap_or(false)
    };
    let permite_infantil = move || {
        vm.servico_info
            .get()
            .map(|info| info.permite_infantil)
            .unwrap_or(false)
    };

    view! {
        <div class="row g-3 mt-1">
            <div class="col-md-4">
                <label class="form-label">"Qtd. Inteira"</label>
                <input
                    type="number"
                    min="0"
                    class="form-control"
                    prop:value=move || vm.qtd_inteira.get()
                    on:input=move |ev| vm.qtd_inteira.set(event_target_value(&ev))
                />
            </div>
            <Show when=aceita_meia>
                <div class="col-md-4">
                    <label class="form-label">"Qtd. Meia"</label>
                    <input
                        type="number"
                        min="0"
                        class="form-control"
                        prop:value=move || vm.qtd_meia.get()
                        on:input=move |ev| {
                            vm.qtd_meia.set(event_target_value(&ev));
                            vm.ao_mudar_qtd_meia();
                        }
                    />
                </div>
            </Show>
            <Show when=permite_infantil>
                <div class="col-md-4">
                    <label class="form-label">"Qtd. Infantil"</label>
                    <input
                        type="number"
                        min="0"
                        class="form-control"
                        prop:value=move || vm.qtd_infantil.get()
                        on:input=move |ev| {
                            vm.qtd_infantil.set(event_target_value(&ev));
                            vm.ao_mudar_qtd_infantil();
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

/// Um input de idade por criança, com cor e tooltip pela classificação
#[component]
fn CamposIdades(vm: OrdemServicoViewModel) -> impl IntoView {
    view! {
        <Show when=move || !vm.idades.with(|linhas| linhas.is_empty())>
            <div class="mt-3">
                <label class="form-label">"Idades das Crianças"</label>
                <div class="row g-2">
                    <For
                        each=move || vm.idades.with(|linhas| linhas.itens().to_vec())
                        key=|(token, _)| *token
                        children=move |(token, campo)| {
                            let numero = move || {
                                vm.idades
                                    .with(|linhas| linhas.posicao(token))
                                    .map(|posicao| posicao + 1)
                                    .unwrap_or_default()
                            };
                            let classe = move || {
                                match vm.classificar(&campo.get()) {
                                    Some(faixa) => {
                                        format!("form-control idade-{}", faixa.classe_css())
                                    }
                                    None => "form-control".to_string(),
                                }
                            };
                            let rotulo = move || {
                                let faixa = vm.classificar(&campo.get())?;
                                let info = vm.servico_info.get()?;
                                Some(faixa.rotulo(&info))
                            };
                            view! {
                                <div class="col-md-2">
                                    <input
                                        type="number"
                                        min="0"
                                        class=classe
                                        placeholder=move || format!("Criança {}", numero())
                                        title=move || rotulo().unwrap_or_default()
                                        prop:value=move || campo.get()
                                        on:input=move |ev| campo.set(event_target_value(&ev))
                                    />
                                    <small class="text-muted">
                                        {move || rotulo().unwrap_or_default()}
                                    </small>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}

#[component]
fn CamposTiposMeia(vm: OrdemServicoViewModel) -> impl IntoView {
    view! {
        <Show when=move || !vm.tipos_meia_sel.with(|linhas| linhas.is_empty())>
            <div class="mt-3">
                <label class="form-label">"Tipos de Meia Entrada"</label>
                <div class="row g-2">
                    <For
                        each=move || vm.tipos_meia_sel.with(|linhas| linhas.itens().to_vec())
                        key=|(token, _)| *token
                        children=move |(token, campo)| {
                            let numero = move || {
                                vm.tipos_meia_sel
                                    .with(|linhas| linhas.posicao(token))
                                    .map(|posicao| posicao + 1)
                                    .unwrap_or_default()
                            };
                            view! {
                                <div class="col-md-4">
                                    <select
                                        class="form-select"
                                        prop:value=move || campo.get()
                                        on:change=move |ev| campo.set(event_target_value(&ev))
                                    >
                                        <option value="">
                                            {move || {
                                                format!("Meia {} - selecione o tipo", numero())
                                            }}
                                        </option>
                                        <For
                                            each=move || vm.tipos_meia_disponiveis.get()
                                            key=|tipo| tipo.id.clone()
                                            children=move |tipo| {
                                                view! {
                                                    <option value=tipo.id.clone()>{tipo.nome.clone()}</option>
                                                }
                                            }
                                        />
                                    </select>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}

#[component]
fn Transfers(vm: OrdemServicoViewModel) -> impl IntoView {
    view! {
        <div class="mt-3">
            <div class="d-flex align-items-center gap-2 mb-2">
                <label class="form-label mb-0">"Transfers"</label>
                <button
                    type="button"
                    class="btn btn-sm btn-outline-primary"
                    on:click=move |_| vm.adicionar_transfer()
                >
                    <i class="bi bi-plus-lg me-1"></i>
                    "Adicionar Transfer"
                </button>
            </div>
            <For
                each=move || vm.transfers_sel.with(|linhas| linhas.itens().to_vec())
                key=|(token, _)| *token
                children=move |(token, campo)| {
                    let numero = move || {
                        vm.transfers_sel
                            .with(|linhas| linhas.posicao(token))
                            .map(|posicao| posicao + 1)
                            .unwrap_or_default()
                    };
                    view! {
                        <div class="d-flex align-items-center gap-2 mb-2">
                            <span class="text-muted small">
                                {move || format!("Opção {}", numero())}
                            </span>
                            <select
                                class="form-select"
                                prop:value=move || campo.get()
                                on:change=move |ev| campo.set(event_target_value(&ev))
                            >
                                <option value="">"Selecione o transfer"</option>
                                {vm.transfers_disponiveis()
                                    .into_iter()
                                    .map(|transfer| {
                                        view! {
                                            <option value=transfer.id.clone()>
                                                {format!(
                                                    "{} ({})",
                                                    transfer.nome,
                                                    formatar_moeda(transfer.valor),
                                                )}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                            <button
                                type="button"
                                class="btn btn-sm btn-outline-danger"
                                on:click=move |_| vm.remover_transfer(token)
                            >
                                <i class="bi bi-trash"></i>
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[component]
fn ListaServicos(vm: OrdemServicoViewModel) -> impl IntoView {
    let lancamentos = move || vm.draft.with(|d| d.lancamentos().to_vec());

    view! {
        <div class="card mb-3">
            <div class="card-header">
                <i class="bi bi-list-ul me-2"></i>
                "Serviços Adicionados"
            </div>
            <div class="card-body p-0">
                <Show
                    when=move || !vm.draft.with(|d| d.is_empty())
                    fallback=|| {
                        view! {
                            <p class="text-muted text-center my-3">
                                "Nenhum serviço adicionado ainda"
                            </p>
                        }
                    }
                >
                    <table class="table table-hover mb-0">
                        <thead>
                            <tr>
                                <th>"Data"</th>
                                <th>"Serviço"</th>
                                <th class="text-center">"Pax"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=lancamentos
                                key=|lancamento| lancamento.id
                                children=move |lancamento| {
                                    let id = lancamento.id;
                                    view! {
                                        <tr>
                                            <td>{formatar_data_br(lancamento.data)}</td>
                                            <td>{lancamento.descricao.clone()}</td>
                                            <td class="text-center">{lancamento.total_pax()}</td>
                                            <td class="text-end">
                                                <button
                                                    type="button"
                                                    class="btn btn-sm btn-outline-primary me-1"
                                                    title="Editar"
                                                    on:click=move |_| vm.editar(id)
                                                >
                                                    <i class="bi bi-pencil"></i>
                                                </button>
                                                <button
                                                    type="button"
                                                    class="btn btn-sm btn-outline-danger"
                                                    title="Remover"
                                                    on:click=move |_| vm.remover(id)
                                                >
                                                    <i class="bi bi-trash"></i>
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn RoteiroPreview(vm: OrdemServicoViewModel) -> impl IntoView {
    view! {
        <div class="card h-100">
            <div class="card-header d-flex justify-content-between align-items-center">
                <span>
                    <i class="bi bi-map me-2"></i>
                    "Roteiro"
                </span>
                <button
                    type="button"
                    class="btn btn-sm btn-outline-secondary"
                    on:click=move |_| vm.copiar_roteiro()
                >
                    <i class="bi bi-clipboard me-1"></i>
                    "Copiar"
                </button>
            </div>
            <div class="card-body">
                <pre class="roteiro-preview mb-0">{move || vm.roteiro_texto()}</pre>
            </div>
        </div>
    }
}

/// Resumo de valores no estilo de nota fiscal
#[component]
fn ResumoValores(vm: OrdemServicoViewModel) -> impl IntoView {
    view! {
        <div class="card h-100">
            <div class="card-header">
                <i class="bi bi-receipt me-2"></i>
                "Resumo de Valores"
            </div>
            <div class="card-body p-0">
                {move || {
                    let resumo = vm.resumo();
                    if resumo.linhas.is_empty() {
                        return view! {
                            <p class="text-muted text-center my-3">"Nenhum valor lançado"</p>
                        }
                            .into_any();
                    }
                    view! {
                        <table class="table table-sm mb-0 resumo-valores">
                            <tbody>
                                {resumo
                                    .linhas
                                    .into_iter()
                                    .map(|linha| {
                                        let mut detalhes = Vec::new();
                                        if linha.qtd_inteira > 0 {
                                            detalhes
                                                .push(
                                                    format!(
                                                        "{} x {} = {}",
                                                        linha.qtd_inteira,
                                                        formatar_moeda(linha.valor_inteira),
                                                        formatar_moeda(linha.subtotal_inteira),
                                                    ),
                                                );
                                        }
                                        if linha.qtd_meia > 0 {
                                            detalhes
                                                .push(
                                                    format!(
                                                        "{} x {} = {}",
                                                        linha.qtd_meia,
                                                        formatar_moeda(linha.valor_meia),
                                                        formatar_moeda(linha.subtotal_meia),
                                                    ),
                                                );
                                        }
                                        if linha.qtd_infantil > 0 {
                                            detalhes
                                                .push(
                                                    format!(
                                                        "{} x {} = {}",
                                                        linha.qtd_infantil,
                                                        formatar_moeda(linha.valor_infantil),
                                                        formatar_moeda(linha.subtotal_infantil),
                                                    ),
                                                );
                                        }
                                        for (nome, valor) in &linha.transfers {
                                            detalhes.push(format!("{} = {}", nome, formatar_moeda(*valor)));
                                        }
                                        view! {
                                            <tr>
                                                <td>
                                                    <div class="fw-semibold">
                                                        {format!(
                                                            "{} - {}",
                                                            formatar_data_br(linha.data),
                                                            linha.nome_servico,
                                                        )}
                                                    </div>
                                                    {detalhes
                                                        .into_iter()
                                                        .map(|detalhe| {
                                                            view! { <div class="text-muted small">{detalhe}</div> }
                                                        })
                                                        .collect_view()}
                                                </td>
                                                <td class="text-end align-bottom">
                                                    {formatar_moeda(linha.subtotal)}
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                                <tr class="table-light">
                                    <td class="fw-bold">
                                        {format!("Total ({} pax)", resumo.total_pax)}
                                    </td>
                                    <td class="text-end fw-bold">
                                        {formatar_moeda(resumo.total_geral)}
                                    </td>
                                </tr>
                            </tbody>
                        </table>
                    }
                        .into_any()
                }}
            </div>
        </div>
    }
}
