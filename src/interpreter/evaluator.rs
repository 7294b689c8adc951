use std::collections::HashMap;
use std::rc::Rc;
use lazy_static::lazy_static;
use thiserror::Error;
use crate::interpreter::ast::Expr;
use crate::interpreter::environment::Environment;
use crate::interpreter::logger::Logger;
use crate::interpreter::value::Value;


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Print,
    Add, Subtract, Multiply, Divide,
    Set, Get,
}

lazy_static! {
    static ref COMMANDS: HashMap<&'static str, Command> = HashMap::from([
        ("print", Command::Print),
        ("add", Command::Add),
        ("sub", Command::Subtract), ("subtract", Command::Subtract),
        ("mult", Command::Multiply), ("multiply", Command::Multiply),
        ("div", Command::Divide), ("divide", Command::Divide),
        ("set", Command::Set),
        ("get", Command::Get),
    ]);
}

impl Command {
    pub fn lookup(name: &str) -> Option<Command> {
        COMMANDS.get(name).copied()
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            Command::Add => value.is_number() || matches!(value, Value::String(_)),
            _ => value.is_number(),
        }
    }

    // First operand of a fold
    fn seed(self, value: Value) -> Value {
        match self {
            Command::Divide => value.to_float().unwrap_or(value),
            _ => value,
        }
    }

    fn apply(self, left: &Value, right: &Value) -> Option<Value> {
        match self {
            Command::Add => left.add(right),
            Command::Subtract => left.subtract(right),
            Command::Multiply => left.multiply(right),
            Command::Divide => left.divide(right),
            Command::Print | Command::Set | Command::Get => None,
        }
    }

    fn invalid_operand(self) -> EvalError {
        match self {
            Command::Subtract => EvalError::InvalidSubtraction,
            Command::Multiply => EvalError::InvalidMultiplication,
            Command::Divide => EvalError::InvalidDivision,
            _ => EvalError::InvalidAddition,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("Invalid addition")]
    InvalidAddition,
    #[error("Invalid subtraction")]
    InvalidSubtraction,
    #[error("Invalid multiplication")]
    InvalidMultiplication,
    #[error("Invalid division")]
    InvalidDivision,
    #[error("Variable name must be string or identifier")]
    InvalidVariableName,
    #[error("Insufficient amount of parameters for '{0}'")]
    InsufficientParameters(String),
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),
}

/// Walks expression trees against one [`Environment`], reporting through the logger.
pub struct Evaluator {
    environment: Environment,
    logger: Rc<dyn Logger>,
}

impl Evaluator {
    pub fn new(logger: Rc<dyn Logger>) -> Evaluator {
        Evaluator {
            environment: Environment::new(),
            logger,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn evaluate(&mut self, expr: &Expr) -> Value {
        match expr {
            Expr::NumberLiteral(value) => Value::Int(*value),
            Expr::StringLiteral(value) => Value::String(value.clone()),
            // Bare identifiers are not variable reads; `get` is the only lookup
            Expr::Identifier(name) => Value::String(name.clone()),
            Expr::List(elements) => self.evaluate_list(elements),
            Expr::Error(message) => {
                self.logger.error(message);
                Value::String(message.clone())
            },
        }
    }

    fn evaluate_list(&mut self, elements: &[Expr]) -> Value {
        match elements {
            [] => Value::empty(),
            [Expr::Identifier(name), args @ ..] => self.evaluate_command(name, args),
            _ => Value::List(elements.iter().map(|element| self.evaluate(element)).collect()),
        }
    }

    fn evaluate_command(&mut self, name: &str, args: &[Expr]) -> Value {
        let command = match Command::lookup(name) {
            Some(command) => command,
            None => {
                self.report(EvalError::UnknownCommand(name.to_owned()));
                return Value::List(vec![Value::Int(1)]);
            },
        };

        tracing::debug!(?command, args = args.len(), "evaluating command");

        match command {
            Command::Print => self.evaluate_print(args),
            Command::Add | Command::Subtract | Command::Multiply | Command::Divide => self.fold(command, args),
            Command::Set => self.evaluate_set(name, args),
            Command::Get => self.evaluate_get(name, args),
        }
    }

    fn evaluate_argument(&mut self, arg: &Expr) -> Value {
        self.evaluate(arg).unwrap_single()
    }

    fn evaluate_print(&mut self, args: &[Expr]) -> Value {
        let mut printed = Vec::with_capacity(args.len());

        for arg in args {
            let value = self.evaluate_argument(arg);
            self.logger.log(&value);
            printed.push(value);
        }

        Value::List(printed)
    }

    // Operands of the wrong type are reported and skipped; the accumulator carries on
    fn fold(&mut self, command: Command, args: &[Expr]) -> Value {
        let mut running: Option<Value> = None;

        for arg in args {
            let value = self.evaluate_argument(arg);

            if !command.accepts(&value) {
                self.report(command.invalid_operand());
                continue;
            }

            running = Some(match running {
                None => command.seed(value),
                Some(left) => match command.apply(&left, &value) {
                    Some(result) => result,
                    None => {
                        self.report(command.invalid_operand());
                        left
                    },
                },
            });
        }

        match running {
            Some(value) => Value::List(vec![value]),
            None => Value::empty(),
        }
    }

    fn evaluate_set(&mut self, command: &str, args: &[Expr]) -> Value {
        if args.len() < 2 {
            self.report(EvalError::InsufficientParameters(command.to_owned()));
            return Value::empty();
        }

        let name = match &args[0] {
            Expr::Identifier(name) | Expr::StringLiteral(name) => name.clone(),
            _ => {
                self.report(EvalError::InvalidVariableName);
                return Value::empty();
            },
        };

        let values: Vec<Value> = args[1..].iter().map(|arg| self.evaluate_argument(arg)).collect();

        let bound = match values.as_slice() {
            [value] => value.clone(),
            _ => Value::List(values.clone()),
        };

        self.environment.define(name, bound);
        Value::List(values)
    }

    fn evaluate_get(&mut self, command: &str, args: &[Expr]) -> Value {
        let name = match args.first() {
            Some(slot) => slot.literal_text(),
            None => {
                self.report(EvalError::InsufficientParameters(command.to_owned()));
                return Value::empty();
            },
        };

        let name = match name {
            Some(name) => name,
            None => {
                self.report(EvalError::InvalidVariableName);
                return Value::empty();
            },
        };

        self.environment.get(&name).cloned().unwrap_or_else(Value::empty)
    }

    fn report(&self, error: EvalError) {
        self.logger.error(&error.to_string());
    }
}
