/// Internal AST for one parsed Quil line
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedStatement {
    Pragma(String),                     // Text after `PRAGMA`
    Gate(String, Vec<f64>, Vec<usize>), // Name, Params, Qubits
    Ignore,
}
