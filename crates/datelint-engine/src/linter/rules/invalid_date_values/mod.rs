//! Rule: invalid-date-values (L1013)
//!
//! Flags integer literals that can never be a valid calendar field value
//! when passed to the JDK date API or compared with its getters:
//!
//! ```java
//! date.setMonth(12);                           // months are 0..=11
//! cal.set(Calendar.HOUR_OF_DAY, 24);
//! new GregorianCalendar(2020, 11, 32);
//! if (cal.get(Calendar.MINUTE) == -1) { ... }
//! ```
//!
//! Only literals and `+`/`-` applied to a literal are checked. Fields are
//! identified through the resolved declaring type of the call, so a unit
//! without semantic information produces no diagnostics.

mod signatures;
mod thresholds;

pub use signatures::{
    MemberName, ParamType, Params, Shape, Signature, SignatureCatalog, COMPARISON_SIGNATURES,
    JAVA_SQL_DATE, JAVA_UTIL_CALENDAR, JAVA_UTIL_DATE, JAVA_UTIL_GREGORIAN_CALENDAR,
    MUTATION_SIGNATURES,
};
pub use thresholds::{Aliases, DateField, ThresholdTable};

use datelint_syntax::ast::{
    self, BinaryExpression, Expression, MethodInvocation, NewClassExpression, UnaryOperator,
};
use datelint_syntax::{Interner, SemanticModel};

use crate::linter::rule::*;

pub struct InvalidDateValues {
    catalog: SignatureCatalog,
    thresholds: ThresholdTable,
}

static META: RuleMeta = RuleMeta {
    name: "invalid-date-values",
    code: "L1013",
    description: "Disallow date and calendar field values outside their legal range",
    category: Category::Correctness,
    default_severity: Severity::Error,
    tags: &["bug"],
    remediation_minutes: 5,
};

/// The node kinds this rule inspects.
enum CallSite<'t> {
    Constructor(&'t NewClassExpression),
    Invocation(&'t MethodInvocation),
    Comparison(&'t BinaryExpression),
}

impl<'t> CallSite<'t> {
    fn of(expr: &'t Expression) -> Option<Self> {
        match expr {
            Expression::NewClass(n) => Some(CallSite::Constructor(n)),
            Expression::MethodInvocation(call) => Some(CallSite::Invocation(call)),
            Expression::Binary(bin) if bin.operator.is_equality() => {
                Some(CallSite::Comparison(bin))
            }
            _ => None,
        }
    }
}

/// A literal argument: `12`, `-1` or `+24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ArgumentLiteral {
    sign: i64,
    magnitude: i64,
}

impl ArgumentLiteral {
    fn of(expr: &Expression) -> Option<Self> {
        match expr {
            Expression::IntLiteral(lit) => Some(Self {
                sign: 1,
                magnitude: lit.value,
            }),
            Expression::Unary(unary) => {
                let sign = match unary.operator {
                    UnaryOperator::Plus => 1,
                    UnaryOperator::Minus => -1,
                    _ => return None,
                };
                match unary.operand.as_ref() {
                    Expression::IntLiteral(lit) => Some(Self {
                        sign,
                        magnitude: lit.value,
                    }),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    fn value(self) -> Option<i64> {
        self.magnitude.checked_mul(self.sign)
    }
}

#[derive(Debug, Clone, Copy)]
enum Message {
    /// Compared with a getter.
    Comparison,
    /// `Calendar.set` or a `GregorianCalendar` constructor argument.
    Setting,
    /// A `Date` setter argument.
    Method,
}

impl Message {
    fn render(self, value: i64, field: &str) -> String {
        match self {
            Message::Comparison => format!("\"{value}\" is not a valid value for \"{field}\"."),
            Message::Setting => {
                format!("\"{value}\" is not a valid value for setting \"{field}\".")
            }
            Message::Method => format!("\"{value}\" is not a valid value for \"{field}\" method."),
        }
    }
}

impl InvalidDateValues {
    pub fn new() -> Self {
        Self {
            catalog: SignatureCatalog::new(),
            thresholds: ThresholdTable::new(),
        }
    }

    fn check_constructor(
        &self,
        new_class: &NewClassExpression,
        ctx: &LintContext<'_>,
        out: &mut Vec<LintDiagnostic>,
    ) {
        if self
            .catalog
            .match_constructor(new_class, ctx.semantic, ctx.interner)
            .is_none()
        {
            return;
        }
        // Position 0 is the year.
        for (position, arg) in new_class.arguments.iter().enumerate().skip(1) {
            let Some(field) = DateField::from_constructor_position(position) else {
                break;
            };
            self.check_argument(arg, field.aliases().parameter, Message::Setting, out);
        }
    }

    fn check_invocation(
        &self,
        call: &MethodInvocation,
        ctx: &LintContext<'_>,
        out: &mut Vec<LintDiagnostic>,
    ) {
        let Some(sig) = self.catalog.match_mutator(call, ctx.semantic, ctx.interner) else {
            return;
        };
        match (sig.shape, call.arguments.as_slice()) {
            (Shape::Setter, [value]) => {
                if let Some(name) = sig.method_name() {
                    self.check_argument(value, name, Message::Method, out);
                }
            }
            (Shape::IndexedSetter, [selector, value]) => {
                if let Some(field) = self.field_reference(selector, ctx.semantic, ctx.interner) {
                    self.check_argument(value, field, Message::Setting, out);
                }
            }
            _ => {}
        }
    }

    fn check_comparison(
        &self,
        bin: &BinaryExpression,
        ctx: &LintContext<'_>,
        out: &mut Vec<LintDiagnostic>,
    ) {
        if ctx.semantic.is_none() {
            return;
        }
        // The left operand wins when both sides are getters.
        let (field, other) = match self.getter_field(&bin.left, ctx.semantic, ctx.interner) {
            Some(field) => (field, bin.right.as_ref()),
            None => match self.getter_field(&bin.right, ctx.semantic, ctx.interner) {
                Some(field) => (field, bin.left.as_ref()),
                None => return,
            },
        };
        self.check_argument(other, field, Message::Comparison, out);
    }

    /// Field read by `expr` when it is a getter-family call.
    fn getter_field<'a>(
        &self,
        expr: &Expression,
        semantic: Option<&SemanticModel>,
        interner: &'a Interner,
    ) -> Option<&'a str> {
        let Expression::MethodInvocation(call) = expr else {
            return None;
        };
        let sig = self.catalog.match_getter(call, semantic, interner)?;
        match sig.shape {
            Shape::IndexedGetter => {
                self.field_reference(call.arguments.first()?, semantic, interner)
            }
            _ => sig.method_name(),
        }
    }

    /// Name of the `Calendar` constant `expr` selects, e.g. `MONTH` for
    /// `Calendar.MONTH`, if it is one with a known range.
    fn field_reference<'a>(
        &self,
        expr: &Expression,
        semantic: Option<&SemanticModel>,
        interner: &'a Interner,
    ) -> Option<&'a str> {
        let model = semantic?;
        let Expression::MemberSelect(select) = expr else {
            return None;
        };
        let symbol = select.identifier.symbol?;
        let owner = model.owner_type_name(symbol)?;
        if interner.resolve(owner) != JAVA_UTIL_CALENDAR {
            return None;
        }
        let name = interner.resolve(model.symbol(symbol)?.name);
        self.thresholds.contains(name).then_some(name)
    }

    fn check_argument(
        &self,
        arg: &Expression,
        field: &str,
        message: Message,
        out: &mut Vec<LintDiagnostic>,
    ) {
        let Some(value) = ArgumentLiteral::of(arg).and_then(ArgumentLiteral::value) else {
            return;
        };
        let Some(upper) = self.thresholds.upper_bound(field) else {
            unreachable!("no threshold registered for date field '{field}'");
        };
        if value > upper || value < 0 {
            tracing::trace!(field, value, upper, span = %arg.span(), "invalid date value");
            out.push(LintDiagnostic {
                rule: META.name,
                code: META.code,
                message: message.render(value, field),
                span: *arg.span(),
                severity: META.default_severity,
                notes: vec![format!("\"{field}\" accepts values from 0 to {upper}")],
            });
        }
    }
}

impl Default for InvalidDateValues {
    fn default() -> Self {
        Self::new()
    }
}

impl LintRule for InvalidDateValues {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn check_expression(
        &self,
        expr: &ast::Expression,
        ctx: &LintContext<'_>,
    ) -> Vec<LintDiagnostic> {
        let mut out = Vec::new();
        match CallSite::of(expr) {
            Some(CallSite::Constructor(new_class)) => {
                self.check_constructor(new_class, ctx, &mut out)
            }
            Some(CallSite::Invocation(call)) => self.check_invocation(call, ctx, &mut out),
            Some(CallSite::Comparison(bin)) => self.check_comparison(bin, ctx, &mut out),
            None => {}
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::Linter;
    use datelint_syntax::ast::Statement;
    use datelint_syntax::{DateLibrary, TreeBuilder};

    fn lint(
        build: impl FnOnce(&TreeBuilder, &DateLibrary) -> Vec<Statement>,
    ) -> Vec<LintDiagnostic> {
        let b = TreeBuilder::new();
        let lib = DateLibrary::declare(&b);
        let stmts = build(&b, &lib);
        let unit = b.unit_in_method("Dates", "run", stmts);
        let (interner, model) = b.finish();
        Linter::new().lint_unit(&unit, &interner, Some(&model), "Dates.java").diagnostics
    }

    fn has_rule(diags: &[LintDiagnostic], code: &str) -> bool {
        diags.iter().any(|d| d.code == code)
    }

    fn set_month(value: fn(&TreeBuilder) -> Expression) -> Vec<LintDiagnostic> {
        lint(|b, lib| {
            let setter = lib.method(lib.util_date, "setMonth").unwrap();
            vec![b.expr_stmt(b.call(b.local("d", JAVA_UTIL_DATE), setter, vec![value(b)]))]
        })
    }

    #[test]
    fn test_setter_at_bound_ok() {
        let diags = set_month(|b| b.int(11));
        assert!(!has_rule(&diags, "L1013"), "setMonth(11) is legal, got: {:?}", diags);
    }

    #[test]
    fn test_setter_past_bound_flagged() {
        let diags = set_month(|b| b.int(12));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "\"12\" is not a valid value for \"setMonth\" method.");
        assert_eq!(diags[0].notes, vec!["\"setMonth\" accepts values from 0 to 11".to_string()]);
    }

    #[test]
    fn test_negative_literal_flagged() {
        let diags = set_month(|b| b.neg(b.int(1)));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "\"-1\" is not a valid value for \"setMonth\" method.");
    }

    #[test]
    fn test_negative_zero_ok() {
        let diags = set_month(|b| b.neg(b.int(0)));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_non_literal_skipped() {
        assert!(set_month(|b| b.local("m", "int")).is_empty());
        assert!(set_month(|b| b.binary(ast::BinaryOperator::Add, b.int(11), b.int(1))).is_empty());
        assert!(set_month(|b| b.paren(b.int(12))).is_empty());
        assert!(set_month(|b| b.unary(UnaryOperator::BitwiseNot, b.int(0))).is_empty());
        assert!(set_month(|b| b.neg(b.neg(b.int(1)))).is_empty());
    }

    #[test]
    fn test_diagnostic_span_is_argument() {
        let b = TreeBuilder::new();
        let lib = DateLibrary::declare(&b);
        let arg = b.neg(b.int(5));
        let arg_span = *arg.span();
        let set_seconds = lib.method(lib.util_date, "setSeconds").unwrap();
        let call = b.call(b.local("d", JAVA_UTIL_DATE), set_seconds, vec![arg]);
        let unit = b.unit(vec![b.expr_stmt(call)]);
        let (interner, model) = b.finish();

        let diags = Linter::new()
            .lint_unit(&unit, &interner, Some(&model), "Dates.java")
            .diagnostics;
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].span, arg_span);
    }

    #[test]
    fn test_calendar_set_through_constant() {
        let diags = lint(|b, lib| {
            let cal = b.local("cal", JAVA_UTIL_CALENDAR);
            let args = vec![b.constant(lib.hour_of_day), b.int(24)];
            vec![b.expr_stmt(b.call(cal, lib.calendar_set, args))]
        });
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "\"24\" is not a valid value for setting \"HOUR_OF_DAY\".");
    }

    #[test]
    fn test_calendar_set_unknown_selector_skipped() {
        let diags = lint(|b, lib| {
            let cal = b.local("cal", JAVA_UTIL_CALENDAR);
            let set = |selector, value| {
                b.expr_stmt(b.call(cal.clone(), lib.calendar_set, vec![selector, value]))
            };
            vec![
                set(b.local("field", "int"), b.int(99)),
                set(b.constant(lib.year), b.neg(b.int(5))),
                set(b.constant(lib.day_of_week), b.int(99)),
            ]
        });
        assert!(diags.is_empty(), "got: {:?}", diags);
    }

    #[test]
    fn test_gregorian_constructor_skips_year() {
        let diags = lint(|b, lib| {
            let args = vec![b.neg(b.int(2020)), b.int(12), b.int(1)];
            vec![b.var_decl("c", Some(b.new_object(lib.gregorian_ctor(3).unwrap(), args)))]
        });
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "\"12\" is not a valid value for setting \"month\".");
    }

    #[test]
    fn test_gregorian_constructor_all_positions() {
        let diags = lint(|b, lib| {
            let args = vec![b.int(2020), b.int(12), b.int(32), b.int(24), b.int(61), b.int(62)];
            vec![b.var_decl("c", Some(b.new_object(lib.gregorian_ctor(6).unwrap(), args)))]
        });
        let messages: Vec<&str> = diags.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "\"12\" is not a valid value for setting \"month\".",
                "\"32\" is not a valid value for setting \"dayOfMonth\".",
                "\"24\" is not a valid value for setting \"hourOfDay\".",
                "\"61\" is not a valid value for setting \"minute\".",
                "\"62\" is not a valid value for setting \"second\".",
            ]
        );
    }

    #[test]
    fn test_comparison_either_side() {
        let diags = lint(|b, lib| {
            let cal = b.local("cal", JAVA_UTIL_CALENDAR);
            let get = b.call(cal, lib.calendar_get, vec![b.constant(lib.day_of_month)]);
            vec![
                b.expr_stmt(b.eq(get.clone(), b.int(32))),
                b.expr_stmt(b.ne(b.int(32), get)),
            ]
        });
        assert_eq!(diags.len(), 2);
        for d in &diags {
            assert_eq!(d.message, "\"32\" is not a valid value for \"DAY_OF_MONTH\".");
        }
    }

    #[test]
    fn test_comparison_with_date_getter() {
        let diags = lint(|b, lib| {
            let get_hours = lib.method(lib.util_date, "getHours").unwrap();
            let get = b.call(b.local("d", JAVA_UTIL_DATE), get_hours, vec![]);
            vec![b.expr_stmt(b.eq(get, b.plus(b.int(24))))]
        });
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "\"24\" is not a valid value for \"getHours\".");
    }

    #[test]
    fn test_ordering_comparison_ignored() {
        let diags = lint(|b, lib| {
            let get_hours = lib.method(lib.util_date, "getHours").unwrap();
            let get = b.call(b.local("d", JAVA_UTIL_DATE), get_hours, vec![]);
            vec![b.expr_stmt(b.binary(ast::BinaryOperator::LessThan, get, b.int(24)))]
        });
        assert!(diags.is_empty());
    }

    #[test]
    fn test_comparison_between_getters() {
        let diags = lint(|b, lib| {
            let cal = b.local("cal", JAVA_UTIL_CALENDAR);
            let minute = b.call(cal.clone(), lib.calendar_get, vec![b.constant(lib.minute)]);
            let second = b.call(cal, lib.calendar_get, vec![b.constant(lib.second)]);
            vec![b.expr_stmt(b.eq(minute, second))]
        });
        assert!(diags.is_empty());
    }
}
