//! Carregamento do contexto de página
//!
//! Lê o bloco `<script id="page-data" type="application/json">` que o
//! servidor embute na página e memoiza o resultado do parse. A ausência
//! do bloco degrada para os valores padrão com um erro no console, sem
//! derrubar o restante da página.

use contracts::shared::page_context::PageData;
use once_cell::sync::OnceCell;

static PAGE_DATA: OnceCell<PageData> = OnceCell::new();

/// Contexto da página atual, carregado uma única vez
pub fn page_data() -> &'static PageData {
    PAGE_DATA.get_or_init(carregar)
}

fn carregar() -> PageData {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("documento indisponível ao carregar #page-data");
        return PageData::default();
    };

    let Some(script) = document.get_element_by_id("page-data") else {
        log::error!("script #page-data não encontrado na página");
        return PageData::default();
    };

    let conteudo = script.text_content().unwrap_or_default();
    match PageData::parse(&conteudo) {
        Ok(data) => data,
        Err(e) => {
            log::error!("erro ao parsear #page-data: {e:#}");
            PageData::default()
        }
    }
}
