//! ViewModel do formulário de ordem de serviço
//!
//! Dono do rascunho da ordem e dos sinais do formulário. As visões
//! derivadas (lista, roteiro, resumo) são recalculadas por inteiro a
//! cada mutação do rascunho; o ViewModel nunca manipula o DOM
//! diretamente.

use chrono::NaiveDate;
use contracts::domain::ordem::{
    gerar_roteiro, montar_lancamento, ErroFormulario, FormularioServico, Lancamento, OrdemDraft,
    ResumoOrdem, SalvarOrdemRequest, TipoMeiaSelecionado, TransferEscolhido, ROTEIRO_VAZIO,
};
use contracts::domain::servico::{
    classificar_idade, FaixaEtaria, ServicoInfo, ServicoResumo, TipoMeia, TransferOpcao,
};
use contracts::shared::page_context::PageData;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::page_context::page_data;
use crate::shared::toast::{use_toast, ToastService};

/// Estado e comandos do formulário de múltiplos serviços
#[derive(Clone, Copy)]
pub struct OrdemServicoViewModel {
    dados: &'static PageData,
    toast: ToastService,

    pub draft: RwSignal<OrdemDraft>,
    /// Roteiro salvo no servidor; exibido até a primeira mutação
    pub roteiro_salvo: RwSignal<Option<String>>,

    pub data_servico: RwSignal<String>,
    pub categoria_id: RwSignal<String>,
    pub servico_id: RwSignal<String>,
    pub servicos: RwSignal<Vec<ServicoResumo>>,
    pub servico_info: RwSignal<Option<ServicoInfo>>,
    pub mostrar_campos: RwSignal<bool>,

    pub qtd_inteira: RwSignal<String>,
    pub qtd_meia: RwSignal<String>,
    pub qtd_infantil: RwSignal<String>,
    /// Um sinal por campo de idade exibido
    pub idades: RwSignal<Linhas<RwSignal<String>>>,
    pub tipos_meia_disponiveis: RwSignal<Vec<TipoMeia>>,
    /// Id do tipo selecionado em cada vaga de meia
    pub tipos_meia_sel: RwSignal<Linhas<RwSignal<String>>>,
    /// Id do transfer selecionado em cada opção adicionada
    pub transfers_sel: RwSignal<Linhas<RwSignal<String>>>,
    pub descricao: RwSignal<String>,

    pub editando_id: RwSignal<Option<i64>>,
    pub salvando: RwSignal<bool>,
}

impl OrdemServicoViewModel {
    pub fn new() -> Self {
        let dados = page_data();

        // Na edição, hidrata o rascunho com todos os lançamentos da ordem
        let mut draft = OrdemDraft::new();
        if dados.editando && !dados.lancamentos.is_empty() {
            draft.carregar(dados.lancamentos.clone());
        }
        let roteiro_salvo = if draft.is_empty() {
            None
        } else {
            dados.roteiro.clone()
        };

        Self {
            dados,
            toast: use_toast(),
            draft: RwSignal::new(draft),
            roteiro_salvo: RwSignal::new(roteiro_salvo),
            data_servico: RwSignal::new(String::new()),
            categoria_id: RwSignal::new(String::new()),
            servico_id: RwSignal::new(String::new()),
            servicos: RwSignal::new(Vec::new()),
            servico_info: RwSignal::new(None),
            mostrar_campos: RwSignal::new(false),
            qtd_inteira: RwSignal::new("0".to_string()),
            qtd_meia: RwSignal::new("0".to_string()),
            qtd_infantil: RwSignal::new("0".to_string()),
            idades: RwSignal::new(Linhas::new()),
            tipos_meia_disponiveis: RwSignal::new(Vec::new()),
            tipos_meia_sel: RwSignal::new(Linhas::new()),
            transfers_sel: RwSignal::new(Linhas::new()),
            descricao: RwSignal::new(String::new()),
            editando_id: RwSignal::new(None),
            salvando: RwSignal::new(false),
        }
    }

    pub fn categorias(&self) -> Vec<contracts::domain::servico::Categoria> {
        self.dados.categorias.clone()
    }

    pub fn transfers_disponiveis(&self) -> Vec<TransferOpcao> {
        self.dados.transfers.clone()
    }

    // ----- comandos de formulário -----

    pub fn ao_mudar_categoria(&self) {
        let categoria = self.categoria_id.get_untracked();
        self.servico_id.set(String::new());
        self.servicos.set(Vec::new());
        self.servico_info.set(None);
        self.mostrar_campos.set(false);

        if categoria.is_empty() {
            return;
        }

        let this = *self;
        spawn_local(async move {
            match model::buscar_servicos(&this.dados.urls.subcategorias, &categoria).await {
                Ok(lista) => this.servicos.set(lista),
                Err(e) => {
                    log::error!("{}", e);
                    this.toast.erro(e);
                }
            }
        });
    }

    pub fn ao_mudar_servico(&self) {
        let servico = self.servico_id.get_untracked();
        if servico.is_empty() {
            self.mostrar_campos.set(false);
            self.servico_info.set(None);
            return;
        }

        let this = *self;
        spawn_local(async move {
            match model::buscar_servico_info(&this.dados.urls.servico_info, &servico).await {
                Ok(info) => {
                    this.servico_info.set(Some(info));
                    this.resetar_campos_servico();
                    this.mostrar_campos.set(true);
                }
                Err(e) => {
                    log::error!("{}", e);
                    this.toast.erro("Erro ao carregar informações do serviço");
                }
            }
        });
    }

    pub fn ao_mudar_qtd_infantil(&self) {
        let qtd = parse_qtd(&self.qtd_infantil.get_untracked());
        self.idades.update(|idades| {
            idades.redimensionar(qtd as usize, || RwSignal::new(String::new()));
        });
    }

    pub fn ao_mudar_qtd_meia(&self) {
        let qtd = parse_qtd(&self.qtd_meia.get_untracked());
        self.tipos_meia_sel.update(|sel| {
            sel.redimensionar(qtd as usize, || RwSignal::new(String::new()));
        });

        if qtd > 0 && self.tipos_meia_disponiveis.get_untracked().is_empty() {
            let this = *self;
            spawn_local(async move {
                match model::buscar_tipos_meia(&this.dados.urls.tipos_meia).await {
                    Ok(tipos) => this.tipos_meia_disponiveis.set(tipos),
                    Err(e) => log::error!("{}", e),
                }
            });
        }
    }

    pub fn adicionar_transfer(&self) {
        self.transfers_sel
            .update(|sel| sel.adicionar(RwSignal::new(String::new())));
    }

    pub fn remover_transfer(&self, token: u64) {
        self.transfers_sel.update(|sel| sel.remover(token));
    }

    /// Classificação reativa de um campo de idade, para cor e tooltip
    pub fn classificar(&self, valor: &str) -> Option<FaixaEtaria> {
        let idade: i32 = valor.trim().parse().ok()?;
        let info = self.servico_info.get()?;
        Some(classificar_idade(idade, &info))
    }

    // ----- rascunho -----

    pub fn adicionar_servico(&self) {
        let form = self.montar_formulario();
        let info = self.servico_info.get_untracked();
        let reutilizado = self.editando_id.get_untracked();

        // valida com id provisório; o definitivo sai do rascunho
        let lancamento = match montar_lancamento(&form, info.as_ref(), reutilizado.unwrap_or(0)) {
            Ok(l) => l,
            Err(e) => {
                self.toast.aviso(e.to_string());
                return;
            }
        };

        self.draft.update(|draft| match reutilizado {
            Some(id) => draft.atualizar(id, lancamento),
            None => {
                let mut novo = lancamento;
                novo.id = draft.alocar_id();
                draft.adicionar(novo);
            }
        });

        self.editando_id.set(None);
        self.roteiro_salvo.set(None);
        self.limpar_formulario(false);
    }

    pub fn editar(&self, id: i64) {
        let Some(lancamento) = self.draft.with_untracked(|d| d.obter(id).cloned()) else {
            return;
        };

        self.editando_id.set(Some(id));
        self.data_servico
            .set(lancamento.data.format("%Y-%m-%d").to_string());
        self.categoria_id.set(lancamento.categoria_id.clone());

        let this = *self;
        spawn_local(async move {
            // recarrega o catálogo da categoria e as regras vivas do serviço
            match model::buscar_servicos(&this.dados.urls.subcategorias, &lancamento.categoria_id)
                .await
            {
                Ok(lista) => this.servicos.set(lista),
                Err(e) => {
                    log::error!("{}", e);
                    this.toast.erro(e);
                    return;
                }
            }
            this.servico_id.set(lancamento.servico_id.clone());

            match model::buscar_servico_info(&this.dados.urls.servico_info, &lancamento.servico_id)
                .await
            {
                Ok(info) => this.servico_info.set(Some(info)),
                Err(e) => {
                    log::error!("{}", e);
                    this.toast.erro("Erro ao carregar informações do serviço");
                    return;
                }
            }

            this.preencher_formulario(&lancamento).await;
            this.mostrar_campos.set(true);
        });
    }

    async fn preencher_formulario(&self, lancamento: &Lancamento) {
        self.qtd_inteira.set(lancamento.qtd_inteira.to_string());
        self.qtd_meia.set(lancamento.qtd_meia.to_string());
        self.qtd_infantil.set(lancamento.qtd_infantil.to_string());

        self.idades.update(|linhas| {
            linhas.substituir(
                lancamento
                    .idades
                    .iter()
                    .map(|idade| RwSignal::new(idade.to_string())),
            );
        });

        if lancamento.qtd_meia > 0 && self.tipos_meia_disponiveis.get_untracked().is_empty() {
            if let Ok(tipos) = model::buscar_tipos_meia(&self.dados.urls.tipos_meia).await {
                self.tipos_meia_disponiveis.set(tipos);
            }
        }
        self.tipos_meia_sel.update(|linhas| {
            linhas.substituir(
                lancamento
                    .tipos_meia
                    .iter()
                    .map(|tipo| RwSignal::new(tipo.id.clone())),
            );
        });

        self.transfers_sel.update(|linhas| {
            linhas.substituir(
                lancamento
                    .transfers
                    .iter()
                    .map(|transfer| RwSignal::new(transfer.transfer_id.clone())),
            );
        });

        self.descricao.set(lancamento.descricao.clone());
    }

    pub fn remover(&self, id: i64) {
        let confirmado = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Deseja realmente remover este serviço?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmado {
            return;
        }

        self.draft.update(|draft| draft.remover(id));
        self.roteiro_salvo.set(None);
    }

    pub fn limpar_formulario(&self, limpar_tudo: bool) {
        if limpar_tudo {
            self.data_servico.set(String::new());
            self.categoria_id.set(String::new());
            self.servicos.set(Vec::new());
            self.mostrar_campos.set(false);
            self.servico_info.set(None);
            self.editando_id.set(None);
        }
        self.servico_id.set(String::new());
        self.qtd_inteira.set("0".to_string());
        self.qtd_meia.set("0".to_string());
        self.qtd_infantil.set("0".to_string());
        self.idades.update(|linhas| linhas.limpar());
        self.tipos_meia_sel.update(|linhas| linhas.limpar());
        self.transfers_sel.update(|linhas| linhas.limpar());
        self.descricao.set(String::new());
    }

    // ----- visões derivadas -----

    pub fn roteiro_texto(&self) -> String {
        if let Some(salvo) = self.roteiro_salvo.get() {
            return salvo;
        }
        self.draft.with(|d| gerar_roteiro(d.lancamentos()))
    }

    pub fn resumo(&self) -> ResumoOrdem {
        self.draft.with(|d| ResumoOrdem::calcular(d.lancamentos()))
    }

    // ----- ações principais -----

    pub fn copiar_roteiro(&self) {
        let texto = self.roteiro_texto();
        if texto.is_empty() || texto.contains(ROTEIRO_VAZIO) {
            self.toast.aviso("Nenhum roteiro para copiar");
            return;
        }

        let toast = self.toast;
        copy_to_clipboard_with_callback(&texto, move || {
            toast.sucesso("Roteiro copiado para a área de transferência!");
        });
    }

    pub fn salvar(&self) {
        if self.draft.with_untracked(|d| d.is_empty()) {
            self.toast.aviso(ErroFormulario::OrdemVazia.to_string());
            return;
        }

        let request = SalvarOrdemRequest {
            servicos: self.draft.with_untracked(|d| d.lancamentos().to_vec()),
            roteiro: self.roteiro_texto(),
        };

        // Na edição, a URL é derivada do id do primeiro lançamento
        // carregado do servidor; todos pertencem à mesma ordem
        let url = match self.dados.lancamentos.first() {
            Some(primeiro) if self.dados.editando => {
                self.dados.urls.lancamento_editar(primeiro.id)
            }
            _ => self.dados.urls.ordem_servico_create.clone(),
        };

        let this = *self;
        this.salvando.set(true);
        spawn_local(async move {
            let resultado = model::salvar_ordem(&url, &this.dados.csrf_token, &request).await;
            this.salvando.set(false);
            match resultado {
                Ok(()) => {
                    this.toast.sucesso("Ordem de Serviço salva com sucesso!");
                    if let Some(window) = web_sys::window() {
                        let _ = window
                            .location()
                            .set_href(&this.dados.urls.ordem_servico_list);
                    }
                }
                Err(e) => {
                    log::error!("{}", e);
                    this.toast.erro(e);
                }
            }
        });
    }

    // ----- montagem do formulário -----

    fn montar_formulario(&self) -> FormularioServico {
        let servico_id = self.servico_id.get_untracked();
        let servico_nome = self
            .servicos
            .with_untracked(|lista| {
                lista
                    .iter()
                    .find(|s| s.id == servico_id)
                    .map(|s| s.nome.clone())
            })
            .or_else(|| {
                self.servico_info
                    .with_untracked(|info| info.as_ref().map(|i| i.nome.clone()))
            })
            .unwrap_or_default();

        let tipos_disponiveis = self.tipos_meia_disponiveis.get_untracked();
        let transfers_disponiveis = self.transfers_disponiveis();

        FormularioServico {
            data: NaiveDate::parse_from_str(&self.data_servico.get_untracked(), "%Y-%m-%d").ok(),
            categoria_id: self.categoria_id.get_untracked(),
            servico_id,
            servico_nome,
            qtd_inteira: parse_qtd(&self.qtd_inteira.get_untracked()),
            qtd_meia: parse_qtd(&self.qtd_meia.get_untracked()),
            qtd_infantil: parse_qtd(&self.qtd_infantil.get_untracked()),
            idades: self.idades.with_untracked(|linhas| {
                linhas
                    .valores()
                    .map(|campo| campo.get_untracked().trim().parse().ok())
                    .collect()
            }),
            tipos_meia: self.tipos_meia_sel.with_untracked(|linhas| {
                linhas
                    .valores()
                    .map(|campo| {
                        let id = campo.get_untracked();
                        tipos_disponiveis
                            .iter()
                            .find(|t| t.id == id)
                            .map(|t| TipoMeiaSelecionado {
                                id: t.id.clone(),
                                tipo: t.nome.clone(),
                            })
                    })
                    .collect()
            }),
            transfers: self.transfers_sel.with_untracked(|linhas| {
                linhas
                    .valores()
                    .map(|campo| {
                        let id = campo.get_untracked();
                        transfers_disponiveis
                            .iter()
                            .find(|t| t.id == id)
                            .map(|t| TransferEscolhido {
                                transfer_id: t.id.clone(),
                                nome: t.nome.clone(),
                                valor: t.valor,
                            })
                    })
                    .collect()
            }),
            descricao: self.descricao.get_untracked(),
        }
    }

    fn resetar_campos_servico(&self) {
        self.qtd_inteira.set("0".to_string());
        self.qtd_meia.set("0".to_string());
        self.qtd_infantil.set("0".to_string());
        self.idades.update(|linhas| linhas.limpar());
        self.tipos_meia_sel.update(|linhas| linhas.limpar());
        self.transfers_sel.update(|linhas| linhas.limpar());
        self.descricao.set(String::new());
    }
}

fn parse_qtd(valor: &str) -> u32 {
    valor.trim().parse().unwrap_or(0)
}

/// Linhas dinâmicas do formulário (idades, tipos de meia, transfers).
///
/// Cada linha carrega um token estável, usado como chave de renderização
/// da lista. Tokens nunca são reaproveitados dentro de um mesmo
/// formulário: remoção, redimensionamento e substituição total sempre
/// deixam as linhas sobreviventes com seus tokens originais e dão tokens
/// frescos às novas, de modo que uma linha nova jamais herda o DOM (e o
/// sinal) de uma linha que deixou de existir.
#[derive(Debug, Clone, PartialEq)]
pub struct Linhas<T> {
    itens: Vec<(u64, T)>,
    proximo_token: u64,
}

impl<T> Linhas<T> {
    pub fn new() -> Self {
        Self {
            itens: Vec::new(),
            proximo_token: 1,
        }
    }

    /// Pares (token, valor) na ordem de exibição
    pub fn itens(&self) -> &[(u64, T)] {
        &self.itens
    }

    pub fn valores(&self) -> impl Iterator<Item = &T> {
        self.itens.iter().map(|(_, valor)| valor)
    }

    pub fn is_empty(&self) -> bool {
        self.itens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.itens.len()
    }

    /// Posição atual de um token, para numerar as linhas na tela
    pub fn posicao(&self, token: u64) -> Option<usize> {
        self.itens.iter().position(|(t, _)| *t == token)
    }

    pub fn adicionar(&mut self, valor: T) {
        let token = self.proximo_token;
        self.proximo_token += 1;
        self.itens.push((token, valor));
    }

    pub fn remover(&mut self, token: u64) {
        self.itens.retain(|(t, _)| *t != token);
    }

    /// Ajusta a quantidade de linhas: o prefixo existente mantém token e
    /// valor, linhas novas entram no final com tokens frescos
    pub fn redimensionar(&mut self, tamanho: usize, mut nova: impl FnMut() -> T) {
        self.itens.truncate(tamanho);
        while self.itens.len() < tamanho {
            self.adicionar(nova());
        }
    }

    /// Substitui todas as linhas; cada valor novo recebe token fresco
    pub fn substituir(&mut self, valores: impl IntoIterator<Item = T>) {
        self.itens.clear();
        for valor in valores {
            self.adicionar(valor);
        }
    }

    pub fn limpar(&mut self) {
        self.itens.clear();
    }
}

impl<T> Default for Linhas<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Linhas;

    fn com_valores(valores: &[&str]) -> Linhas<String> {
        let mut linhas = Linhas::new();
        for valor in valores {
            linhas.adicionar(valor.to_string());
        }
        linhas
    }

    #[test]
    fn remover_a_primeira_linha_preserva_as_demais() {
        let mut linhas = com_valores(&["ida", "volta", "extra"]);
        let primeiro = linhas.itens()[0].0;
        let restantes = linhas.itens()[1..].to_vec();

        linhas.remover(primeiro);

        // as sobreviventes mantêm token e valor; nada é religado
        assert_eq!(linhas.itens(), &restantes[..]);
        assert_eq!(linhas.posicao(restantes[0].0), Some(0));
        assert_eq!(linhas.posicao(primeiro), None);
    }

    #[test]
    fn tokens_nunca_sao_reaproveitados() {
        let mut linhas = com_valores(&["a"]);
        let antigo = linhas.itens()[0].0;

        linhas.remover(antigo);
        linhas.adicionar("b".to_string());
        assert_ne!(linhas.itens()[0].0, antigo);
    }

    #[test]
    fn redimensionar_mantem_o_prefixo_e_cria_tokens_frescos() {
        let mut linhas = com_valores(&["4", "9", "11"]);
        let antes = linhas.itens().to_vec();

        linhas.redimensionar(2, String::new);
        assert_eq!(linhas.itens(), &antes[..2]);

        linhas.redimensionar(4, String::new);
        assert_eq!(&linhas.itens()[..2], &antes[..2]);
        let novos: Vec<u64> = linhas.itens()[2..].iter().map(|(t, _)| *t).collect();
        assert_ne!(novos[0], novos[1]);
        assert!(novos
            .iter()
            .all(|novo| antes.iter().all(|(token, _)| token != novo)));
    }

    #[test]
    fn substituir_realoca_todos_os_tokens() {
        // recarga das linhas na edição de um lançamento
        let mut linhas = com_valores(&["6"]);
        let antigo = linhas.itens()[0].0;

        linhas.substituir(vec!["7".to_string(), "8".to_string()]);
        let valores: Vec<&String> = linhas.valores().collect();
        assert_eq!(valores, ["7", "8"]);
        assert!(linhas.itens().iter().all(|(token, _)| *token != antigo));
    }

    #[test]
    fn limpar_esvazia_sem_afetar_tokens_futuros() {
        let mut linhas = com_valores(&["a", "b"]);
        let maior = linhas.itens().last().unwrap().0;

        linhas.limpar();
        assert!(linhas.is_empty());
        assert_eq!(linhas.len(), 0);

        linhas.adicionar("c".to_string());
        assert!(linhas.itens()[0].0 > maior);
    }
}
