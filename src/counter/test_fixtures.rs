//! Shared syntax tables for counter tests.

use crate::language::SyntaxTable;

pub fn c_table() -> SyntaxTable {
    SyntaxTable::from_csv_str(".c,1,//,1,/* */").unwrap()
}

pub fn python_table() -> SyntaxTable {
    SyntaxTable::from_csv_str(r#".py,1,#,2,''' ''',""" """"#).unwrap()
}

/// Two single-line markers and one block pair.
pub fn php_table() -> SyntaxTable {
    SyntaxTable::from_csv_str(".php,2,//,#,1,/* */").unwrap()
}

/// Java declared lowercase only, plus CSS whose single-line marker is a block start.
pub fn java_css_table() -> SyntaxTable {
    SyntaxTable::from_csv_str(".java,1,//,1,/* */\n.css,1,/*,1,/* */").unwrap()
}
