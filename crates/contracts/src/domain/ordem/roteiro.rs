//! Geração do texto do roteiro
//!
//! O roteiro agrupa os lançamentos por data, em ordem crescente, e
//! numera os itens de cada dia como "Opção N" na ordem em que foram
//! adicionados. O texto resultante é exibido no preview, copiado para a
//! área de transferência e enviado junto com o payload de salvamento.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::lancamento::Lancamento;
use crate::shared::format::formatar_data_br;

/// Mensagem exibida (e protegida contra cópia) quando não há serviços
pub const ROTEIRO_VAZIO: &str = "Adicione serviços para visualizar o roteiro";

/// Gera o texto completo do roteiro a partir da sequência de lançamentos.
pub fn gerar_roteiro(lancamentos: &[Lancamento]) -> String {
    if lancamentos.is_empty() {
        return ROTEIRO_VAZIO.to_string();
    }

    // BTreeMap ordena as datas; dentro de cada data a ordem de inserção
    // é preservada
    let mut por_data: BTreeMap<NaiveDate, Vec<&Lancamento>> = BTreeMap::new();
    for lancamento in lancamentos {
        por_data.entry(lancamento.data).or_default().push(lancamento);
    }

    let mut roteiro = String::from("=== ROTEIRO ===\n\n");

    for (data, do_dia) in &por_data {
        roteiro.push_str(&format!("📅 {}\n", formatar_data_br(*data)));
        roteiro.push_str(&"─".repeat(50));
        roteiro.push_str("\n\n");

        for (indice, lancamento) in do_dia.iter().enumerate() {
            roteiro.push_str(&format!("Opção {}\n", indice + 1));
            roteiro.push_str(&lancamento.descricao);
            roteiro.push('\n');

            if lancamento.qtd_inteira > 0 {
                roteiro.push_str(&format!("  • {} Inteira(s)\n", lancamento.qtd_inteira));
            }
            if lancamento.qtd_meia > 0 {
                roteiro.push_str(&format!("  • {} Meia(s)\n", lancamento.qtd_meia));
            }
            if lancamento.qtd_infantil > 0 {
                let idades: Vec<String> =
                    lancamento.idades.iter().map(|i| i.to_string()).collect();
                roteiro.push_str(&format!(
                    "  • {} Infantil(is) (idades: {})\n",
                    lancamento.qtd_infantil,
                    idades.join(", ")
                ));
            }

            if !lancamento.transfers.is_empty() {
                roteiro.push_str("  🚌 Transfers:\n");
                for transfer in &lancamento.transfers {
                    roteiro.push_str(&format!(
                        "     - {} (R$ {:.2})\n",
                        transfer.nome, transfer.valor
                    ));
                }
            }

            roteiro.push('\n');
        }

        roteiro.push('\n');
    }

    roteiro
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ordem::lancamento::TransferLancado;

    fn lancamento(id: i64, data: &str, descricao: &str) -> Lancamento {
        Lancamento {
            id,
            data: data.parse().unwrap(),
            categoria_id: "1".to_string(),
            servico_id: "1".to_string(),
            servico_nome: descricao.to_string(),
            qtd_inteira: 2,
            qtd_meia: 0,
            qtd_infantil: 0,
            idades: vec![],
            tipos_meia: vec![],
            transfers: vec![],
            valor_transfer_ida: 0.0,
            valor_transfer_volta: 0.0,
            descricao: descricao.to_string(),
            info: Default::default(),
        }
    }

    #[test]
    fn vazio_mostra_mensagem_fixa() {
        assert_eq!(gerar_roteiro(&[]), ROTEIRO_VAZIO);
    }

    #[test]
    fn datas_ordenadas_independente_da_insercao() {
        let tarde = lancamento(1, "2025-03-10", "Passeio B");
        let cedo = lancamento(2, "2025-01-05", "Passeio A");
        let roteiro = gerar_roteiro(&[tarde, cedo]);

        let pos_cedo = roteiro.find("05/01/2025").unwrap();
        let pos_tarde = roteiro.find("10/03/2025").unwrap();
        assert!(pos_cedo < pos_tarde);
        assert!(roteiro.starts_with("=== ROTEIRO ===\n\n"));
    }

    #[test]
    fn itens_do_mesmo_dia_numerados_na_ordem_de_insercao() {
        let primeiro = lancamento(1, "2025-02-01", "Mergulho");
        let segundo = lancamento(2, "2025-02-01", "Trilha");
        let roteiro = gerar_roteiro(&[primeiro, segundo]);

        let opcao1 = roteiro.find("Opção 1\nMergulho").unwrap();
        let opcao2 = roteiro.find("Opção 2\nTrilha").unwrap();
        assert!(opcao1 < opcao2);
    }

    #[test]
    fn detalha_quantidades_idades_e_transfers() {
        let mut item = lancamento(1, "2025-02-01", "Passeio de Barco");
        item.qtd_meia = 1;
        item.qtd_infantil = 2;
        item.idades = vec![4, 9];
        item.transfers = vec![TransferLancado {
            transfer_id: "t1".to_string(),
            nome: "Hotel → Cais".to_string(),
            data: item.data,
            quantidade: 1,
            valor: 20.0,
        }];

        let roteiro = gerar_roteiro(&[item]);
        assert!(roteiro.contains("  • 2 Inteira(s)\n"));
        assert!(roteiro.contains("  • 1 Meia(s)\n"));
        assert!(roteiro.contains("  • 2 Infantil(is) (idades: 4, 9)\n"));
        assert!(roteiro.contains("  🚌 Transfers:\n"));
        assert!(roteiro.contains("     - Hotel → Cais (R$ 20.00)\n"));
    }
}
