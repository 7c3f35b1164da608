/// A syntactic reference to a variable, `$name`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct VariableRef {
    pub line: usize,
    pub name: String,
}

impl VariableRef {
    pub fn new(line: usize, name: &str) -> Self {
        VariableRef {
            line,
            name: name.to_owned(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Stmt {
    Assignment {
        line: usize,
        target: VariableRef,
        value: String,
    },
    Print {
        line: usize,
        target: VariableRef,
    },
}

impl Stmt {
    pub fn line(&self) -> usize {
        match self {
            Stmt::Assignment { line, .. } | Stmt::Print { line, .. } => *line,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Program {
    /// Line parsing started on.
    pub line: usize,
    pub statements: Vec<Stmt>,
}
