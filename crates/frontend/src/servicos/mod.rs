pub mod detalhe;
pub mod ordem;
pub mod subcategoria;
