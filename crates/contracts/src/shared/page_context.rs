//! Contexto de página embutido pelo servidor
//!
//! O servidor renderiza um bloco `<script id="page-data" type="application/json">`
//! com tudo o que a camada cliente precisa: qual página montar, flag de
//! edição, lançamentos pré-existentes, token CSRF e as URLs dos
//! endpoints. O parse acontece uma única vez no carregamento.

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::domain::empresa::DadosEmpresa;
use crate::domain::ordem::Lancamento;
use crate::domain::servico::{Categoria, TransferOpcao};

/// Página que o bundle deve montar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Pagina {
    OrdemServicoForm,
    OrdemServicoDetalhe,
    Empresa,
    SubcategoriaForm,
    #[default]
    #[serde(other)]
    Desconhecida,
}

/// URLs de endpoints fornecidas pelo servidor; nada é calculado no
/// cliente além de anexar o id do primeiro lançamento à base de edição
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PageUrls {
    #[serde(default)]
    pub ordem_servico_create: String,
    #[serde(default)]
    pub ordem_servico_list: String,
    /// Base de `/servicos/lancamentos/{id}/editar/`
    #[serde(default)]
    pub lancamento_editar_base: String,
    #[serde(default)]
    pub subcategorias: String,
    #[serde(default)]
    pub servico_info: String,
    #[serde(default)]
    pub tipos_meia: String,
    #[serde(default)]
    pub traducao: String,
    #[serde(default)]
    pub validar_cep: String,
    #[serde(default)]
    pub empresa_submit: String,
}

impl PageUrls {
    /// URL de atualização da ordem, derivada do id do primeiro
    /// lançamento carregado (todos pertencem à mesma ordem)
    pub fn lancamento_editar(&self, primeiro_id: i64) -> String {
        format!(
            "{}/{}/editar/",
            self.lancamento_editar_base.trim_end_matches('/'),
            primeiro_id
        )
    }
}

/// Tudo que o servidor entrega à camada cliente no carregamento
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PageData {
    #[serde(default)]
    pub pagina: Pagina,
    #[serde(default)]
    pub editando: bool,
    #[serde(default)]
    pub lancamentos: Vec<Lancamento>,
    /// Roteiro salvo no servidor, usado como preview inicial na edição
    #[serde(default)]
    pub roteiro: Option<String>,
    #[serde(default)]
    pub csrf_token: String,
    #[serde(default)]
    pub urls: PageUrls,
    #[serde(default)]
    pub categorias: Vec<Categoria>,
    #[serde(default)]
    pub transfers: Vec<TransferOpcao>,
    #[serde(default)]
    pub empresa: Option<DadosEmpresa>,
}

impl PageData {
    pub fn parse(json: &str) -> anyhow::Result<PageData> {
        serde_json::from_str(json).context("conteúdo de #page-data inválido")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimo() {
        let data = PageData::parse(r#"{"pagina": "empresa", "csrf_token": "abc"}"#).unwrap();
        assert_eq!(data.pagina, Pagina::Empresa);
        assert_eq!(data.csrf_token, "abc");
        assert!(!data.editando);
        assert!(data.lancamentos.is_empty());
    }

    #[test]
    fn parse_edicao_com_lancamentos() {
        let json = r#"{
            "pagina": "ordem_servico_form",
            "editando": true,
            "lancamentos": [{
                "id": 42,
                "data": "2025-03-10",
                "categoria_id": "1",
                "servico_id": "7",
                "servico_nome": "City Tour",
                "qtd_inteira": 2,
                "descricao": "City Tour - 2 Inteira(s)"
            }],
            "roteiro": "=== ROTEIRO ===",
            "urls": {"lancamento_editar_base": "/servicos/lancamentos"}
        }"#;
        let data = PageData::parse(json).unwrap();
        assert!(data.editando);
        assert_eq!(data.lancamentos.len(), 1);
        assert_eq!(data.lancamentos[0].id, 42);
        assert_eq!(
            data.urls.lancamento_editar(42),
            "/servicos/lancamentos/42/editar/"
        );
    }

    #[test]
    fn pagina_desconhecida_nao_quebra_o_parse() {
        let erro = PageData::parse("{nao é json}");
        assert!(erro.is_err());

        let data = PageData::parse("{}").unwrap();
        assert_eq!(data.pagina, Pagina::Desconhecida);

        let data = PageData::parse(r#"{"pagina": "relatorios"}"#).unwrap();
        assert_eq!(data.pagina, Pagina::Desconhecida);
    }
}
