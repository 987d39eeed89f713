//! Ordem de Serviço - formulário de múltiplos serviços
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (catálogo e salvamento)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::OrdemServicoForm;
pub use view_model::OrdemServicoViewModel;
