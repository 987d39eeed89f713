//! Lançamento de serviço e o tradutor formulário → lançamento
//!
//! `Lancamento` é o item de linha de uma ordem de serviço, serializado
//! com os mesmos nomes de campo que o servidor espera no POST de
//! salvamento. `montar_lancamento` valida os valores correntes do
//! formulário e produz um lançamento completo, sem nunca persistir um
//! item parcial.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::servico::{classificar_idade, FaixaEtaria, ServicoInfo};

/// Tipo de meia entrada escolhido para uma das vagas de meia
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipoMeiaSelecionado {
    pub id: String,
    pub tipo: String,
}

/// Transfer incluído em um lançamento
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferLancado {
    pub transfer_id: String,
    pub nome: String,
    /// Mesma data do serviço
    pub data: NaiveDate,
    pub quantidade: u32,
    pub valor: f64,
}

/// Um serviço lançado dentro da ordem.
///
/// O `id` é o identificador do servidor quando o item veio de uma ordem
/// existente, ou um token local alocado pelo rascunho até o salvamento.
/// `info` congela as regras de preço vigentes no momento da adição.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lancamento {
    pub id: i64,
    pub data: NaiveDate,
    pub categoria_id: String,
    pub servico_id: String,
    pub servico_nome: String,
    #[serde(default)]
    pub qtd_inteira: u32,
    #[serde(default)]
    pub qtd_meia: u32,
    #[serde(default)]
    pub qtd_infantil: u32,
    #[serde(default)]
    pub idades: Vec<i32>,
    #[serde(default)]
    pub tipos_meia: Vec<TipoMeiaSelecionado>,
    #[serde(default)]
    pub transfers: Vec<TransferLancado>,
    #[serde(default)]
    pub valor_transfer_ida: f64,
    #[serde(default)]
    pub valor_transfer_volta: f64,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub info: ServicoInfo,
}

impl Lancamento {
    /// Total de passageiros do lançamento, somando as três faixas
    pub fn total_pax(&self) -> u32 {
        self.qtd_inteira + self.qtd_meia + self.qtd_infantil
    }
}

/// Transfer escolhido em uma das opções do formulário
#[derive(Debug, Clone, PartialEq)]
pub struct TransferEscolhido {
    pub transfer_id: String,
    pub nome: String,
    pub valor: f64,
}

/// Valores correntes do formulário de serviço, já desacoplados do DOM.
///
/// Campos numéricos vêm como o usuário os digitou: quantidades ausentes
/// contam como zero e idades não preenchidas ficam `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormularioServico {
    pub data: Option<NaiveDate>,
    pub categoria_id: String,
    pub servico_id: String,
    pub servico_nome: String,
    pub qtd_inteira: u32,
    pub qtd_meia: u32,
    pub qtd_infantil: u32,
    /// Uma entrada por campo de idade presente na tela
    pub idades: Vec<Option<i32>>,
    /// Uma entrada por seletor de tipo de meia; `None` quando não selecionado
    pub tipos_meia: Vec<Option<TipoMeiaSelecionado>>,
    /// Uma entrada por opção de transfer; `None` quando não selecionada
    pub transfers: Vec<Option<TransferEscolhido>>,
    pub descricao: String,
}

/// Falhas de preenchimento do formulário, com as mensagens exibidas ao
/// usuário como `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErroFormulario {
    #[error("Por favor, preencha data, categoria e serviço")]
    CamposObrigatorios,
    #[error("Informações do serviço não carregadas")]
    InfoNaoCarregada,
    #[error("Adicione ao menos uma quantidade (Inteira, Meia ou Infantil)")]
    SemQuantidade,
    #[error("Preencha as idades de todas as crianças")]
    IdadesIncompletas,
    #[error("Existem idades inválidas. Por favor, corrija.")]
    IdadesInvalidas,
    #[error("Preencha os tipos de meia entrada")]
    TiposMeiaIncompletos,
    #[error("Selecione todos os tipos de meia entrada")]
    TiposMeiaVazios,
    #[error("Adicione ao menos um serviço")]
    OrdemVazia,
}

/// Valida o formulário e monta um lançamento completo.
///
/// `id` é reaproveitado quando o usuário está editando um item já
/// adicionado; caso contrário o chamador aloca um token novo no
/// rascunho. Nenhuma validação deixa estado parcial para trás.
pub fn montar_lancamento(
    form: &FormularioServico,
    info: Option<&ServicoInfo>,
    id: i64,
) -> Result<Lancamento, ErroFormulario> {
    let data = match form.data {
        Some(data) if !form.categoria_id.is_empty() && !form.servico_id.is_empty() => data,
        _ => return Err(ErroFormulario::CamposObrigatorios),
    };

    let info = info.ok_or(ErroFormulario::InfoNaoCarregada)?;

    if form.qtd_inteira == 0 && form.qtd_meia == 0 && form.qtd_infantil == 0 {
        return Err(ErroFormulario::SemQuantidade);
    }

    let mut idades = Vec::new();
    if form.qtd_infantil > 0 {
        if form.idades.len() != form.qtd_infantil as usize {
            return Err(ErroFormulario::IdadesIncompletas);
        }
        for idade in &form.idades {
            let idade = idade.ok_or(ErroFormulario::IdadesInvalidas)?;
            if classificar_idade(idade, info) == FaixaEtaria::Invalida {
                return Err(ErroFormulario::IdadesInvalidas);
            }
            idades.push(idade);
        }
    }

    let mut tipos_meia = Vec::new();
    if form.qtd_meia > 0 {
        if form.tipos_meia.len() != form.qtd_meia as usize {
            return Err(ErroFormulario::TiposMeiaIncompletos);
        }
        for tipo in &form.tipos_meia {
            let tipo = tipo.clone().ok_or(ErroFormulario::TiposMeiaVazios)?;
            tipos_meia.push(tipo);
        }
    }

    // Primeiro transfer preenchido conta como ida; os demais acumulam
    // no valor de volta. Heurística herdada, mantida como está.
    let mut transfers = Vec::new();
    let mut valor_transfer_ida = 0.0;
    let mut valor_transfer_volta = 0.0;
    for escolhido in form.transfers.iter().flatten() {
        transfers.push(TransferLancado {
            transfer_id: escolhido.transfer_id.clone(),
            nome: escolhido.nome.clone(),
            data,
            quantidade: 1,
            valor: escolhido.valor,
        });
        if transfers.len() == 1 {
            valor_transfer_ida = escolhido.valor;
        } else {
            valor_transfer_volta += escolhido.valor;
        }
    }

    let descricao = if form.descricao.trim().is_empty() {
        descricao_padrao(form)
    } else {
        form.descricao.trim().to_string()
    };

    Ok(Lancamento {
        id,
        data,
        categoria_id: form.categoria_id.clone(),
        servico_id: form.servico_id.clone(),
        servico_nome: form.servico_nome.clone(),
        qtd_inteira: form.qtd_inteira,
        qtd_meia: form.qtd_meia,
        qtd_infantil: form.qtd_infantil,
        idades,
        tipos_meia,
        transfers,
        valor_transfer_ida,
        valor_transfer_volta,
        descricao,
        info: info.clone(),
    })
}

fn descricao_padrao(form: &FormularioServico) -> String {
    let mut descricao = form.servico_nome.clone();
    if form.qtd_inteira > 0 {
        descricao.push_str(&format!(" - {} Inteira(s)", form.qtd_inteira));
    }
    if form.qtd_meia > 0 {
        descricao.push_str(&format!(" - {} Meia(s)", form.qtd_meia));
    }
    if form.qtd_infantil > 0 {
        descricao.push_str(&format!(" - {} Infantil(is)", form.qtd_infantil));
    }
    descricao
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info_basica() -> ServicoInfo {
        ServicoInfo {
            nome: "City Tour".to_string(),
            valor_inteira: 100.0,
            valor_meia: 50.0,
            valor_infantil: 30.0,
            aceita_meia_entrada: true,
            permite_infantil: true,
            idade_minima_infantil: 5,
            idade_maxima_infantil: 11,
            ..Default::default()
        }
    }

    fn form_basico() -> FormularioServico {
        FormularioServico {
            data: NaiveDate::from_ymd_opt(2025, 3, 10),
            categoria_id: "1".to_string(),
            servico_id: "7".to_string(),
            servico_nome: "City Tour".to_string(),
            qtd_inteira: 2,
            ..Default::default()
        }
    }

    #[test]
    fn campos_obrigatorios_primeiro() {
        let mut form = form_basico();
        form.data = None;
        assert_eq!(
            montar_lancamento(&form, Some(&info_basica()), 1),
            Err(ErroFormulario::CamposObrigatorios)
        );

        let mut form = form_basico();
        form.categoria_id.clear();
        // Falta de categoria é acusada antes da falta de info
        assert_eq!(
            montar_lancamento(&form, None, 1),
            Err(ErroFormulario::CamposObrigatorios)
        );
    }

    #[test]
    fn exige_info_carregada() {
        assert_eq!(
            montar_lancamento(&form_basico(), None, 1),
            Err(ErroFormulario::InfoNaoCarregada)
        );
    }

    #[test]
    fn exige_alguma_quantidade() {
        let mut form = form_basico();
        form.qtd_inteira = 0;
        assert_eq!(
            montar_lancamento(&form, Some(&info_basica()), 1),
            Err(ErroFormulario::SemQuantidade)
        );
    }

    #[test]
    fn idades_devem_estar_completas_e_validas() {
        let info = info_basica();

        let mut form = form_basico();
        form.qtd_infantil = 2;
        form.idades = vec![Some(6)];
        assert_eq!(
            montar_lancamento(&form, Some(&info), 1),
            Err(ErroFormulario::IdadesIncompletas)
        );

        form.idades = vec![Some(6), None];
        assert_eq!(
            montar_lancamento(&form, Some(&info), 1),
            Err(ErroFormulario::IdadesInvalidas)
        );

        let restritivo = ServicoInfo {
            tem_idade_minima: true,
            idade_minima: 5,
            ..info.clone()
        };
        form.idades = vec![Some(6), Some(3)];
        assert_eq!(
            montar_lancamento(&form, Some(&restritivo), 1),
            Err(ErroFormulario::IdadesInvalidas)
        );

        form.idades = vec![Some(6), Some(9)];
        let lancamento = montar_lancamento(&form, Some(&info), 1).unwrap();
        assert_eq!(lancamento.idades, vec![6, 9]);
    }

    #[test]
    fn tipos_meia_devem_estar_selecionados() {
        let info = info_basica();
        let mut form = form_basico();
        form.qtd_meia = 2;

        form.tipos_meia = vec![Some(TipoMeiaSelecionado {
            id: "1".to_string(),
            tipo: "Estudante".to_string(),
        })];
        assert_eq!(
            montar_lancamento(&form, Some(&info), 1),
            Err(ErroFormulario::TiposMeiaIncompletos)
        );

        form.tipos_meia.push(None);
        assert_eq!(
            montar_lancamento(&form, Some(&info), 1),
            Err(ErroFormulario::TiposMeiaVazios)
        );
    }

    #[test]
    fn primeiro_transfer_e_ida_demais_somam_volta() {
        let mut form = form_basico();
        form.transfers = vec![
            None,
            Some(TransferEscolhido {
                transfer_id: "t1".to_string(),
                nome: "Hotel → Cais".to_string(),
                valor: 20.0,
            }),
            Some(TransferEscolhido {
                transfer_id: "t2".to_string(),
                nome: "Cais → Hotel".to_string(),
                valor: 25.0,
            }),
            Some(TransferEscolhido {
                transfer_id: "t3".to_string(),
                nome: "Extra".to_string(),
                valor: 5.0,
            }),
        ];

        let lancamento = montar_lancamento(&form, Some(&info_basica()), 9).unwrap();
        assert_eq!(lancamento.transfers.len(), 3);
        assert_eq!(lancamento.valor_transfer_ida, 20.0);
        assert_eq!(lancamento.valor_transfer_volta, 30.0);
        assert_eq!(lancamento.transfers[0].quantidade, 1);
        assert_eq!(lancamento.transfers[0].data, lancamento.data);
    }

    #[test]
    fn descricao_padrao_so_com_segmentos_nao_nulos() {
        let info = info_basica();

        let mut form = form_basico();
        form.qtd_infantil = 1;
        form.idades = vec![Some(7)];
        let lancamento = montar_lancamento(&form, Some(&info), 1).unwrap();
        assert_eq!(
            lancamento.descricao,
            "City Tour - 2 Inteira(s) - 1 Infantil(is)"
        );

        form.descricao = "  Saída às 9h  ".to_string();
        let lancamento = montar_lancamento(&form, Some(&info), 1).unwrap();
        assert_eq!(lancamento.descricao, "Saída às 9h");
    }

    #[test]
    fn congela_info_no_lancamento() {
        let info = info_basica();
        let lancamento = montar_lancamento(&form_basico(), Some(&info), 4).unwrap();
        assert_eq!(lancamento.info, info);
        assert_eq!(lancamento.id, 4);
        assert_eq!(lancamento.total_pax(), 2);
    }
}
