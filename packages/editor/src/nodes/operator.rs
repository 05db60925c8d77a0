//! # Arithmetic Operator Node
//!
//! Two number slots joined by a selectable operator. The operator set is
//! closed: addition, subtraction and multiplication. There is no division,
//! and the `/` symbol is refused rather than mapped to another operator.

use crate::change::ChangeNotifier;
use crate::controls::Choice;
use crate::drag::DropTarget;
use crate::editable::EditableNode;
use crate::errors::{EditorError, EditorResult};
use crate::slot::NumberSlot;
use montage_language::NumberExpression;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOperator {
    Add,
    Subtract,
    Multiply,
}

impl ArithmeticOperator {
    pub const ALL: [ArithmeticOperator; 3] = [
        ArithmeticOperator::Add,
        ArithmeticOperator::Subtract,
        ArithmeticOperator::Multiply,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            ArithmeticOperator::Add => "+",
            ArithmeticOperator::Subtract => "-",
            ArithmeticOperator::Multiply => "*",
        }
    }

    pub fn from_symbol(symbol: &str) -> EditorResult<Self> {
        Self::ALL
            .into_iter()
            .find(|operator| operator.symbol() == symbol)
            .ok_or_else(|| EditorError::UnknownOperator(symbol.to_string()))
    }

    /// Expression combining two operands with this operator
    pub fn apply(self, op1: NumberExpression, op2: NumberExpression) -> NumberExpression {
        match self {
            ArithmeticOperator::Add => NumberExpression::add(op1, op2),
            ArithmeticOperator::Subtract => NumberExpression::subtract(op1, op2),
            ArithmeticOperator::Multiply => NumberExpression::multiply(op1, op2),
        }
    }
}

impl fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug)]
pub struct NumberOperatorNode {
    operand1: NumberSlot,
    operator: Choice<ArithmeticOperator>,
    operand2: NumberSlot,
    changes: ChangeNotifier,
}

impl NumberOperatorNode {
    pub fn new(
        operator: ArithmeticOperator,
        op1: NumberExpression,
        op2: NumberExpression,
        owner: &ChangeNotifier,
    ) -> EditorResult<Self> {
        let changes = owner.child();

        let operand1 = NumberSlot::new(op1, &changes)?;
        let operand2 = NumberSlot::new(op2, &changes)?;
        let operator = Choice::new(ArithmeticOperator::ALL.to_vec(), &operator, &changes)
            .ok_or_else(|| EditorError::UnknownOperator(operator.to_string()))?;

        Ok(Self {
            operand1,
            operator,
            operand2,
            changes,
        })
    }

    pub fn operator(&self) -> ArithmeticOperator {
        *self.operator.selected()
    }

    /// Select the operator shown as `symbol`
    pub fn set_operator(&mut self, symbol: &str) -> EditorResult<()> {
        let operator = ArithmeticOperator::from_symbol(symbol)?;
        self.operator.select(&operator)?;

        debug!(operator = %operator, "Selected operator");
        Ok(())
    }

    pub fn operand1(&self) -> &NumberSlot {
        &self.operand1
    }

    pub fn operand1_mut(&mut self) -> &mut NumberSlot {
        &mut self.operand1
    }

    pub fn operand2(&self) -> &NumberSlot {
        &self.operand2
    }

    pub fn operand2_mut(&mut self) -> &mut NumberSlot {
        &mut self.operand2
    }
}

impl EditableNode for NumberOperatorNode {
    type Model = NumberExpression;

    fn to_model(&self) -> NumberExpression {
        self.operator()
            .apply(self.operand1.to_model(), self.operand2.to_model())
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.operand1.set_read_only(read_only);
        self.operator.set_read_only(read_only);
        self.operand2.set_read_only(read_only);
    }

    fn is_read_only(&self) -> bool {
        self.operator.is_read_only()
    }

    fn changes(&self) -> &ChangeNotifier {
        &self.changes
    }

    fn for_each_target(&mut self, visit: &mut dyn FnMut(&mut dyn DropTarget)) {
        self.operand1.for_each_target(visit);
        self.operand2.for_each_target(visit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use montage_language::LanguageComponent;

    fn two_plus_three(owner: &ChangeNotifier) -> NumberOperatorNode {
        NumberOperatorNode::new(
            ArithmeticOperator::from_symbol("+").unwrap(),
            NumberExpression::value(2.0),
            NumberExpression::value(3.0),
            owner,
        )
        .unwrap()
    }

    #[test]
    fn test_add_of_two_values() {
        let owner = ChangeNotifier::root();
        let node = two_plus_three(&owner);

        assert_eq!(
            node.to_model(),
            NumberExpression::add(NumberExpression::value(2.0), NumberExpression::value(3.0))
        );
    }

    #[test]
    fn test_switching_operator_rebuilds_expression() {
        let owner = ChangeNotifier::root();
        let mut node = two_plus_three(&owner);

        node.set_operator("*").unwrap();
        assert_eq!(
            node.to_model(),
            NumberExpression::multiply(NumberExpression::value(2.0), NumberExpression::value(3.0))
        );
        assert_eq!(owner.emitted(), 1);
    }

    #[test]
    fn test_division_is_not_an_operator() {
        let owner = ChangeNotifier::root();
        let mut node = two_plus_three(&owner);

        assert!(matches!(
            node.set_operator("/"),
            Err(EditorError::UnknownOperator(symbol)) if symbol == "/"
        ));
        assert_eq!(node.operator(), ArithmeticOperator::Add);
        assert_eq!(owner.emitted(), 0);
    }

    #[test]
    fn test_empty_operands_model_gaps() {
        let owner = ChangeNotifier::root();
        let mut node = two_plus_three(&owner);

        node.operand2_mut().empty().unwrap();
        assert_eq!(
            node.to_model(),
            NumberExpression::add(NumberExpression::value(2.0), NumberExpression::Gap)
        );
    }

    #[test]
    fn test_read_only_reaches_operands() {
        let owner = ChangeNotifier::root();
        let mut node = two_plus_three(&owner);
        let candidate: LanguageComponent = NumberExpression::value(1.0).into();

        node.set_read_only(true);

        assert!(!node.operand1().is_acceptable(&candidate));
        assert!(!node.operand2().is_acceptable(&candidate));
        assert!(matches!(node.set_operator("-"), Err(EditorError::ReadOnly)));
    }
}
