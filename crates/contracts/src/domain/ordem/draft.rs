//! Rascunho da ordem de serviço
//!
//! Sequência ordenada de lançamentos mantida apenas em memória de
//! página. O rascunho não valida nem renderiza nada: validação é papel
//! do tradutor de formulário e as visões derivadas reagem às mutações
//! através dos sinais da camada de UI.

use super::lancamento::Lancamento;

/// Coleção de lançamentos de uma ordem em edição.
///
/// Identificadores locais são alocados sequencialmente e nunca colidem
/// com os ids já presentes (inclusive os vindos do servidor ao hidratar
/// uma ordem existente).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrdemDraft {
    lancamentos: Vec<Lancamento>,
    proximo_id: i64,
}

impl OrdemDraft {
    pub fn new() -> Self {
        Self {
            lancamentos: Vec::new(),
            proximo_id: 1,
        }
    }

    pub fn lancamentos(&self) -> &[Lancamento] {
        &self.lancamentos
    }

    pub fn len(&self) -> usize {
        self.lancamentos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lancamentos.is_empty()
    }

    pub fn obter(&self, id: i64) -> Option<&Lancamento> {
        self.lancamentos.iter().find(|l| l.id == id)
    }

    /// Id do primeiro lançamento, usado para derivar a URL de edição
    /// (todos os lançamentos pertencem à mesma ordem no servidor)
    pub fn primeiro_id(&self) -> Option<i64> {
        self.lancamentos.first().map(|l| l.id)
    }

    /// Aloca um token local único para um lançamento novo
    pub fn alocar_id(&mut self) -> i64 {
        let id = self.proximo_id;
        self.proximo_id += 1;
        id
    }

    pub fn adicionar(&mut self, lancamento: Lancamento) {
        self.proximo_id = self.proximo_id.max(lancamento.id + 1);
        self.lancamentos.push(lancamento);
    }

    /// Substitui o lançamento de `id` por inteiro; sem efeito quando o
    /// id não existe mais (por exemplo removido durante a edição)
    pub fn atualizar(&mut self, id: i64, lancamento: Lancamento) {
        if let Some(existente) = self.lancamentos.iter_mut().find(|l| l.id == id) {
            *existente = lancamento;
        }
    }

    pub fn remover(&mut self, id: i64) {
        self.lancamentos.retain(|l| l.id != id);
    }

    /// Substitui toda a sequência, usada ao hidratar uma ordem vinda do
    /// servidor para edição
    pub fn carregar(&mut self, lancamentos: Vec<Lancamento>) {
        self.proximo_id = lancamentos
            .iter()
            .map(|l| l.id + 1)
            .max()
            .unwrap_or(1)
            .max(1);
        self.lancamentos = lancamentos;
    }

    pub fn limpar(&mut self) {
        self.lancamentos.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn lancamento(id: i64, dia: u32) -> Lancamento {
        Lancamento {
            id,
            data: NaiveDate::from_ymd_opt(2025, 3, dia).unwrap(),
            categoria_id: "1".to_string(),
            servico_id: "1".to_string(),
            servico_nome: "Passeio".to_string(),
            qtd_inteira: 1,
            qtd_meia: 0,
            qtd_infantil: 0,
            idades: vec![],
            tipos_meia: vec![],
            transfers: vec![],
            valor_transfer_ida: 0.0,
            valor_transfer_volta: 0.0,
            descricao: String::new(),
            info: Default::default(),
        }
    }

    #[test]
    fn comprimento_acompanha_adicoes_e_remocoes() {
        let mut draft = OrdemDraft::new();
        let a = draft.alocar_id();
        draft.adicionar(lancamento(a, 1));
        let b = draft.alocar_id();
        draft.adicionar(lancamento(b, 2));
        let c = draft.alocar_id();
        draft.adicionar(lancamento(c, 3));
        assert_eq!(draft.len(), 3);

        draft.remover(b);
        assert_eq!(draft.len(), 2);
        assert!(draft.obter(b).is_none());

        let ids: Vec<i64> = draft.lancamentos().iter().map(|l| l.id).collect();
        let mut unicos = ids.clone();
        unicos.dedup();
        assert_eq!(ids, unicos);
    }

    #[test]
    fn atualizar_substitui_no_lugar() {
        let mut draft = OrdemDraft::new();
        let a = draft.alocar_id();
        draft.adicionar(lancamento(a, 1));
        let b = draft.alocar_id();
        draft.adicionar(lancamento(b, 2));

        let mut editado = lancamento(a, 15);
        editado.qtd_inteira = 5;
        draft.atualizar(a, editado);

        assert_eq!(draft.len(), 2);
        assert_eq!(draft.lancamentos()[0].id, a);
        assert_eq!(draft.lancamentos()[0].qtd_inteira, 5);
        // ordem de inserção preservada
        assert_eq!(draft.lancamentos()[1].id, b);
    }

    #[test]
    fn atualizar_id_inexistente_e_no_op() {
        let mut draft = OrdemDraft::new();
        let a = draft.alocar_id();
        draft.adicionar(lancamento(a, 1));
        draft.atualizar(999, lancamento(999, 2));
        assert_eq!(draft.len(), 1);
        assert_eq!(draft.lancamentos()[0].id, a);
    }

    #[test]
    fn carregar_substitui_e_nao_colide_ids() {
        let mut draft = OrdemDraft::new();
        let id = draft.alocar_id();
        draft.adicionar(lancamento(id, 1));

        // hidratação com ids do servidor
        draft.carregar(vec![lancamento(501, 1), lancamento(502, 2)]);
        assert_eq!(draft.len(), 2);
        assert_eq!(draft.primeiro_id(), Some(501));

        let novo = draft.alocar_id();
        assert!(novo > 502);
    }

    #[test]
    fn limpar_esvazia() {
        let mut draft = OrdemDraft::new();
        let id = draft.alocar_id();
        draft.adicionar(lancamento(id, 1));
        draft.limpar();
        assert!(draft.is_empty());
        assert_eq!(draft.primeiro_id(), None);
    }
}
