//! Página de detalhes da ordem de serviço
//!
//! Copiar roteiro com feedback temporário no botão e tradução do
//! roteiro para outros idiomas, com cache por idioma.

mod model;
mod view;
mod view_model;

pub use view::OrdemServicoDetalhe;
pub use view_model::DetalheViewModel;
