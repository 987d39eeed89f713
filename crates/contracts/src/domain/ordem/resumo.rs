//! Resumo de totais da ordem, no estilo de uma nota fiscal
//!
//! Cada linha detalha os subtotais por faixa e por transfer de um
//! lançamento, sempre sobre os preços congelados no momento da adição
//! (`Lancamento::info`), nunca sobre o catálogo vivo.

use super::lancamento::Lancamento;

/// Subtotais calculados de um lançamento
#[derive(Debug, Clone, PartialEq)]
pub struct LinhaResumo {
    pub id: i64,
    pub nome_servico: String,
    pub data: chrono::NaiveDate,
    pub qtd_inteira: u32,
    pub qtd_meia: u32,
    pub qtd_infantil: u32,
    pub valor_inteira: f64,
    pub valor_meia: f64,
    pub valor_infantil: f64,
    pub subtotal_inteira: f64,
    pub subtotal_meia: f64,
    pub subtotal_infantil: f64,
    /// Nome e valor de cada transfer do lançamento
    pub transfers: Vec<(String, f64)>,
    pub total_pax: u32,
    pub subtotal: f64,
}

/// Totais gerais da ordem em edição
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumoOrdem {
    pub linhas: Vec<LinhaResumo>,
    pub total_geral: f64,
    pub total_pax: u32,
}

impl ResumoOrdem {
    /// Recalcula o resumo inteiro a partir da sequência de lançamentos.
    pub fn calcular(lancamentos: &[Lancamento]) -> Self {
        let mut resumo = ResumoOrdem::default();

        for lancamento in lancamentos {
            let info = &lancamento.info;

            let subtotal_inteira = lancamento.qtd_inteira as f64 * info.valor_inteira;
            let subtotal_meia = lancamento.qtd_meia as f64 * info.valor_meia;
            let subtotal_infantil = lancamento.qtd_infantil as f64 * info.valor_infantil;

            let transfers: Vec<(String, f64)> = lancamento
                .transfers
                .iter()
                .map(|t| (t.nome.clone(), t.valor))
                .collect();
            let total_transfers: f64 = transfers.iter().map(|(_, valor)| valor).sum();

            let subtotal =
                subtotal_inteira + subtotal_meia + subtotal_infantil + total_transfers;
            let total_pax = lancamento.total_pax();

            resumo.total_geral += subtotal;
            resumo.total_pax += total_pax;
            resumo.linhas.push(LinhaResumo {
                id: lancamento.id,
                nome_servico: if info.nome.is_empty() {
                    lancamento.servico_nome.clone()
                } else {
                    info.nome.clone()
                },
                data: lancamento.data,
                qtd_inteira: lancamento.qtd_inteira,
                qtd_meia: lancamento.qtd_meia,
                qtd_infantil: lancamento.qtd_infantil,
                valor_inteira: info.valor_inteira,
                valor_meia: info.valor_meia,
                valor_infantil: info.valor_infantil,
                subtotal_inteira,
                subtotal_meia,
                subtotal_infantil,
                transfers,
                total_pax,
                subtotal,
            });
        }

        resumo
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ordem::lancamento::TransferLancado;
    use crate::domain::servico::ServicoInfo;
    use crate::shared::format::formatar_moeda;

    fn lancamento_exemplo() -> Lancamento {
        Lancamento {
            id: 1,
            data: "2025-03-10".parse().unwrap(),
            categoria_id: "1".to_string(),
            servico_id: "1".to_string(),
            servico_nome: "Passeio".to_string(),
            qtd_inteira: 2,
            qtd_meia: 1,
            qtd_infantil: 1,
            idades: vec![8],
            tipos_meia: vec![],
            transfers: vec![TransferLancado {
                transfer_id: "t1".to_string(),
                nome: "Hotel → Cais".to_string(),
                data: "2025-03-10".parse().unwrap(),
                quantidade: 1,
                valor: 20.0,
            }],
            valor_transfer_ida: 20.0,
            valor_transfer_volta: 0.0,
            descricao: "Passeio".to_string(),
            info: ServicoInfo {
                nome: "Passeio".to_string(),
                valor_inteira: 100.0,
                valor_meia: 50.0,
                valor_infantil: 30.0,
                ..Default::default()
            },
        }
    }

    #[test]
    fn subtotal_soma_faixas_e_transfers() {
        let resumo = ResumoOrdem::calcular(&[lancamento_exemplo()]);
        assert_eq!(resumo.linhas.len(), 1);

        let linha = &resumo.linhas[0];
        assert_eq!(linha.subtotal_inteira, 200.0);
        assert_eq!(linha.subtotal_meia, 50.0);
        assert_eq!(linha.subtotal_infantil, 30.0);
        assert_eq!(linha.subtotal, 300.0);
        assert_eq!(linha.total_pax, 4);
        assert_eq!(formatar_moeda(resumo.total_geral), "R$ 300,00");
    }

    #[test]
    fn usa_precos_congelados_e_nao_o_catalogo_vivo() {
        let mut lancamento = lancamento_exemplo();
        // o catálogo mudou depois da adição; o resumo ignora
        lancamento.servico_nome = "Passeio (novo preço)".to_string();
        let resumo = ResumoOrdem::calcular(&[lancamento]);
        assert_eq!(resumo.linhas[0].valor_inteira, 100.0);
        assert_eq!(resumo.linhas[0].nome_servico, "Passeio");
    }

    #[test]
    fn vazio_zera_totais() {
        let resumo = ResumoOrdem::calcular(&[]);
        assert!(resumo.linhas.is_empty());
        assert_eq!(resumo.total_pax, 0);
        assert_eq!(formatar_moeda(resumo.total_geral), "R$ 0,00");
    }

    #[test]
    fn totais_acumulam_entre_lancamentos() {
        let mut segundo = lancamento_exemplo();
        segundo.id = 2;
        segundo.qtd_meia = 0;
        segundo.qtd_infantil = 0;
        segundo.transfers.clear();

        let resumo = ResumoOrdem::calcular(&[lancamento_exemplo(), segundo]);
        assert_eq!(resumo.total_geral, 300.0 + 200.0);
        assert_eq!(resumo.total_pax, 4 + 2);
    }
}
