pub mod empresa;
pub mod ordem;
pub mod servico;
