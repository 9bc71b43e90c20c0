use crate::language::IntType;
use crate::parser::operator::{PrefixOp, InfixOp};
use crate::runtime::{Object, HashKey, RuntimeError, ExecResult};


pub fn eval_prefix(op: PrefixOp, operand: &Object) -> ExecResult<Object> {
    match op {
        PrefixOp::Not => Ok(Object::Boolean(!operand.is_truthy())),

        PrefixOp::Neg => match operand {
            Object::Integer(value) => value.checked_neg()
                .map(Object::Integer)
                .ok_or_else(RuntimeError::overflow_error),
            _ => Err(RuntimeError::unknown_prefix_operator(op, operand)),
        },
    }
}


pub fn eval_infix(op: InfixOp, lhs: &Object, rhs: &Object) -> ExecResult<Object> {
    match (lhs, rhs) {
        (Object::Integer(a), Object::Integer(b)) => eval_integer_infix(op, *a, *b),

        // concatenation needs a string on both sides
        (Object::String(..), _) | (_, Object::String(..)) if op == InfixOp::Add => match (lhs, rhs) {
            (Object::String(a), Object::String(b)) => {
                let mut result = String::with_capacity(a.len() + b.len());
                result.push_str(a);
                result.push_str(b);
                Ok(Object::from(result))
            },
            _ => Err(RuntimeError::type_mismatch(op, lhs, rhs)),
        },

        (Object::String(a), Object::String(b)) if op.is_equality() => eval_equality(op, a == b),

        _ if op.is_equality() => eval_equality(op, lhs.identical(rhs)),

        _ if lhs.type_name() != rhs.type_name() => Err(RuntimeError::type_mismatch(op, lhs, rhs)),

        _ => Err(RuntimeError::unknown_infix_operator(op, lhs, rhs)),
    }
}

fn eval_equality(op: InfixOp, equal: bool) -> ExecResult<Object> {
    match op {
        InfixOp::EQ => Ok(Object::Boolean(equal)),
        _ => Ok(Object::Boolean(!equal)),
    }
}

fn eval_integer_infix(op: InfixOp, lhs: IntType, rhs: IntType) -> ExecResult<Object> {
    let value = match op {
        InfixOp::Add => lhs.checked_add(rhs),
        InfixOp::Sub => lhs.checked_sub(rhs),
        InfixOp::Mul => lhs.checked_mul(rhs),
        InfixOp::Div => {
            if rhs == 0 {
                return Err(RuntimeError::divide_by_zero());
            }
            lhs.checked_div(rhs)
        },

        InfixOp::LT => return Ok(Object::Boolean(lhs < rhs)),
        InfixOp::GT => return Ok(Object::Boolean(lhs > rhs)),
        InfixOp::EQ => return Ok(Object::Boolean(lhs == rhs)),
        InfixOp::NE => return Ok(Object::Boolean(lhs != rhs)),
    };

    value.map(Object::Integer)
        .ok_or_else(RuntimeError::overflow_error)
}


pub fn eval_index(collection: &Object, index: &Object) -> ExecResult<Object> {
    match collection {
        // non-integer and out of range indices are not errors
        Object::Array(items) => {
            let item = match index {
                Object::Integer(index) => usize::try_from(*index).ok()
                    .and_then(|index| items.get(index)),
                _ => None,
            };
            Ok(item.cloned().unwrap_or(Object::Null))
        },

        // a key of a kind the hash does not hold is unusable, a missing key of a held kind is Null
        Object::Hash(hash) => {
            let key = HashKey::try_from(index)?;
            match hash.get(&key) {
                Some(pair) => Ok(pair.value().clone()),
                None if hash.accepts_key(&key) => Ok(Object::Null),
                None => Err(RuntimeError::unhashable_value(index)),
            }
        },

        _ => Err(RuntimeError::index_not_supported(collection)),
    }
}
