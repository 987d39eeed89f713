//! Consulta de CEP no endpoint do servidor

use contracts::domain::empresa::{CepConsulta, CepResposta};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Consulta o CEP e devolve os campos de endereço encontrados.
pub async fn consultar_cep(
    url: &str,
    csrf_token: &str,
    cep: &str,
) -> Result<CepResposta, String> {
    let consulta = CepConsulta {
        cep: cep.to_string(),
    };

    let response = Request::post(&api_url(url))
        .header("X-CSRFToken", csrf_token)
        .json(&consulta)
        .map_err(|e| format!("Erro ao buscar CEP: {}", e))?
        .send()
        .await
        .map_err(|_| "Erro ao buscar CEP. Tente novamente.".to_string())?;

    response
        .json::<CepResposta>()
        .await
        .map_err(|_| "Erro ao buscar CEP. Tente novamente.".to_string())
}
