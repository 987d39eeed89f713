//! Dados da Empresa - formulário de configuração
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (consulta de CEP)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::EmpresaForm;
pub use view_model::EmpresaViewModel;
