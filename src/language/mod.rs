mod table;

pub use table::SyntaxTable;
