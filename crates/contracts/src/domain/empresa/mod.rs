//! Contratos do formulário de dados da empresa
//!
//! Consulta de CEP via endpoint do servidor e as regras de validação da
//! logo enviadas pelo formulário.

use serde::{Deserialize, Serialize};

/// Valores iniciais do formulário, embutidos pelo servidor na página
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DadosEmpresa {
    #[serde(default)]
    pub razao_social: String,
    #[serde(default)]
    pub cnpj_cpf: String,
    #[serde(default)]
    pub cep: String,
    #[serde(default)]
    pub logradouro: String,
    #[serde(default)]
    pub numero: String,
    #[serde(default)]
    pub bairro: String,
    #[serde(default)]
    pub cidade: String,
    #[serde(default)]
    pub uf: String,
    #[serde(default)]
    pub telefone: String,
    #[serde(default)]
    pub email: String,
    /// URL atual da logo, quando existir
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Corpo do POST de consulta de CEP
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CepConsulta {
    pub cep: String,
}

/// Resposta da consulta de CEP, com os campos de endereço preenchidos
/// quando encontrada
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CepResposta {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub logradouro: Option<String>,
    #[serde(default)]
    pub bairro: Option<String>,
    #[serde(default)]
    pub localidade: Option<String>,
    #[serde(default)]
    pub uf: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Formatos de imagem aceitos para a logo
const TIPOS_LOGO: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Tamanho máximo da logo em bytes (5 MB)
pub const TAMANHO_MAXIMO_LOGO: u64 = 5 * 1024 * 1024;

/// Valida tipo e tamanho do arquivo de logo antes do upload.
pub fn validar_logo(content_type: &str, tamanho: u64) -> Result<(), String> {
    if !TIPOS_LOGO.contains(&content_type) {
        return Err("Formato não suportado. Use JPEG, PNG, GIF ou WebP.".to_string());
    }
    if tamanho > TAMANHO_MAXIMO_LOGO {
        return Err("Arquivo muito grande. Máximo 5MB.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aceita_formatos_de_imagem_conhecidos() {
        assert!(validar_logo("image/png", 1024).is_ok());
        assert!(validar_logo("image/webp", 1024).is_ok());
        assert!(validar_logo("image/jpg", 1024).is_ok());
    }

    #[test]
    fn rejeita_formato_desconhecido() {
        let erro = validar_logo("application/pdf", 1024).unwrap_err();
        assert!(erro.contains("Formato não suportado"));
        assert!(validar_logo("image/svg+xml", 10).is_err());
    }

    #[test]
    fn rejeita_arquivo_acima_de_cinco_megabytes() {
        assert!(validar_logo("image/png", TAMANHO_MAXIMO_LOGO).is_ok());
        let erro = validar_logo("image/png", TAMANHO_MAXIMO_LOGO + 1).unwrap_err();
        assert!(erro.contains("muito grande"));
    }
}
