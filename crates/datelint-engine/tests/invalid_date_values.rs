use datelint_engine::linter::rules::invalid_date_values::{
    JAVA_SQL_DATE, JAVA_UTIL_CALENDAR, JAVA_UTIL_DATE,
};
use datelint_engine::{LintDiagnostic, Linter};
use datelint_syntax::ast::{Expression, Statement};
use datelint_syntax::{DateLibrary, SymbolId, TreeBuilder};

// ============================================================================
// Helpers
// ============================================================================

fn lint_resolved(
    build: impl FnOnce(&TreeBuilder, &DateLibrary) -> Vec<Statement>,
) -> Vec<LintDiagnostic> {
    let b = TreeBuilder::new();
    let lib = DateLibrary::declare(&b);
    let stmts = build(&b, &lib);
    let unit = b.unit_in_method("Dates", "run", stmts);
    let (interner, model) = b.finish();
    Linter::new().lint_unit(&unit, &interner, Some(&model), "Dates.java").diagnostics
}

fn lint_unresolved(
    build: impl FnOnce(&TreeBuilder, &DateLibrary) -> Vec<Statement>,
) -> Vec<LintDiagnostic> {
    let b = TreeBuilder::new();
    let lib = DateLibrary::declare(&b);
    let stmts = build(&b, &lib);
    let unit = b.unit_in_method("Dates", "run", stmts);
    let (interner, _) = b.finish();
    Linter::new().lint_unit(&unit, &interner, None, "Dates.java").diagnostics
}

fn messages(diags: &[LintDiagnostic]) -> Vec<&str> {
    diags.iter().map(|d| d.message.as_str()).collect()
}

/// `d.<setter>(value)` on a local of the setter's declaring type.
fn date_setter(
    b: &TreeBuilder,
    lib: &DateLibrary,
    owner: SymbolId,
    setter: &str,
    value: Expression,
) -> Statement {
    let ty = if owner == lib.sql_date { JAVA_SQL_DATE } else { JAVA_UTIL_DATE };
    b.expr_stmt(b.call(b.local("d", ty), lib.method(owner, setter).unwrap(), vec![value]))
}

// ============================================================================
// Setter bounds
// ============================================================================

const SETTERS: [(&str, i64); 5] = [
    ("setMonth", 11),
    ("setDate", 31),
    ("setHours", 23),
    ("setMinutes", 60),
    ("setSeconds", 61),
];

#[test]
fn test_every_setter_accepts_its_maximum() {
    for (setter, max) in SETTERS {
        let diags =
            lint_resolved(|b, lib| vec![date_setter(b, lib, lib.util_date, setter, b.int(max))]);
        assert!(diags.is_empty(), "{setter}({max}) should be legal, got: {:?}", diags);
    }
}

#[test]
fn test_every_setter_rejects_maximum_plus_one() {
    for (setter, max) in SETTERS {
        let diags = lint_resolved(|b, lib| {
            vec![date_setter(b, lib, lib.util_date, setter, b.int(max + 1))]
        });
        assert_eq!(
            messages(&diags),
            vec![format!("\"{}\" is not a valid value for \"{setter}\" method.", max + 1)],
        );
    }
}

#[test]
fn test_every_setter_accepts_zero() {
    for (setter, _) in SETTERS {
        let diags =
            lint_resolved(|b, lib| vec![date_setter(b, lib, lib.util_date, setter, b.int(0))]);
        assert!(diags.is_empty(), "{setter}(0) should be legal");
    }
}

#[test]
fn test_sql_date_setters_checked() {
    let diags =
        lint_resolved(|b, lib| vec![date_setter(b, lib, lib.sql_date, "setDate", b.int(32))]);
    assert_eq!(messages(&diags), vec!["\"32\" is not a valid value for \"setDate\" method."]);
}

#[test]
fn test_negative_literal_always_flagged() {
    let diags = lint_resolved(|b, lib| {
        vec![date_setter(b, lib, lib.util_date, "setSeconds", b.neg(b.int(1)))]
    });
    assert_eq!(messages(&diags), vec!["\"-1\" is not a valid value for \"setSeconds\" method."]);
}

#[test]
fn test_unary_plus_same_as_bare_literal() {
    let plus = lint_resolved(|b, lib| {
        vec![date_setter(b, lib, lib.util_date, "setHours", b.plus(b.int(24)))]
    });
    let bare = lint_resolved(|b, lib| {
        vec![date_setter(b, lib, lib.util_date, "setHours", b.int(24))]
    });
    assert_eq!(messages(&plus), messages(&bare));
    assert_eq!(plus.len(), 1);
}

#[test]
fn test_non_literal_argument_never_flagged() {
    let diags = lint_resolved(|b, lib| {
        let get_month = lib.method(lib.util_date, "getMonth").unwrap();
        let other_month = b.call(b.local("d2", JAVA_UTIL_DATE), get_month, vec![]);
        vec![
            date_setter(b, lib, lib.util_date, "setMonth", b.local("x", "int")),
            date_setter(b, lib, lib.util_date, "setMonth", b.neg(b.local("y", "int"))),
            date_setter(b, lib, lib.util_date, "setMonth", other_month),
        ]
    });
    assert!(diags.is_empty(), "got: {:?}", diags);
}

// ============================================================================
// Calendar.set / Calendar.get
// ============================================================================

#[test]
fn test_calendar_set_month() {
    let diags = lint_resolved(|b, lib| {
        let cal = b.local("cal", JAVA_UTIL_CALENDAR);
        vec![b.expr_stmt(b.call(cal, lib.calendar_set, vec![b.constant(lib.month), b.int(12)]))]
    });
    assert_eq!(messages(&diags), vec!["\"12\" is not a valid value for setting \"MONTH\"."]);
}

#[test]
fn test_calendar_set_with_variable_selector() {
    let diags = lint_resolved(|b, lib| {
        let cal = b.local("cal", JAVA_UTIL_CALENDAR);
        let args = vec![b.local("someIntVar", "int"), b.int(12)];
        vec![b.expr_stmt(b.call(cal, lib.calendar_set, args))]
    });
    assert!(diags.is_empty());
}

#[test]
fn test_calendar_set_constant_of_other_type() {
    // `Other.MONTH` has the right name but is not owned by java.util.Calendar.
    let diags = lint_resolved(|b, lib| {
        let other = b.declare_type("com.acme.Other");
        let month = b.declare_field(other, "MONTH", "int");
        let cal = b.local("cal", JAVA_UTIL_CALENDAR);
        vec![b.expr_stmt(b.call(cal, lib.calendar_set, vec![b.constant(month), b.int(12)]))]
    });
    assert!(diags.is_empty());
}

#[test]
fn test_calendar_set_every_field() {
    let diags = lint_resolved(|b, lib| {
        let cal = b.local("cal", JAVA_UTIL_CALENDAR);
        [
            (lib.month, 12),
            (lib.day_of_month, 32),
            (lib.hour_of_day, 24),
            (lib.minute, 61),
            (lib.second, 62),
        ]
        .into_iter()
        .map(|(field, value)| {
            let args = vec![b.constant(field), b.int(value)];
            b.expr_stmt(b.call(cal.clone(), lib.calendar_set, args))
        })
        .collect()
    });
    assert_eq!(
        messages(&diags),
        vec![
            "\"12\" is not a valid value for setting \"MONTH\".",
            "\"32\" is not a valid value for setting \"DAY_OF_MONTH\".",
            "\"24\" is not a valid value for setting \"HOUR_OF_DAY\".",
            "\"61\" is not a valid value for setting \"MINUTE\".",
            "\"62\" is not a valid value for setting \"SECOND\".",
        ]
    );
}

// ============================================================================
// GregorianCalendar constructor
// ============================================================================

#[test]
fn test_gregorian_month_flagged_year_ignored() {
    let diags = lint_resolved(|b, lib| {
        let gregorian = lib.gregorian_ctor(3).unwrap();
        let ctor = b.new_object(gregorian, vec![b.int(2020), b.int(12), b.int(1)]);
        vec![b.var_decl("c", Some(ctor))]
    });
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].message, "\"12\" is not a valid value for setting \"month\".");
}

#[test]
fn test_gregorian_huge_year_ignored() {
    let diags = lint_resolved(|b, lib| {
        let gregorian = lib.gregorian_ctor(3).unwrap();
        let ctor = b.new_object(gregorian, vec![b.int(99_999), b.int(0), b.int(1)]);
        vec![b.var_decl("c", Some(ctor))]
    });
    assert!(diags.is_empty());
}

#[test]
fn test_util_date_constructor_not_checked() {
    let diags = lint_resolved(|b, lib| {
        let ctor = b.new_object(lib.util_date_ctor(), vec![b.int(120), b.int(12), b.int(40)]);
        vec![b.var_decl("d", Some(ctor))]
    });
    assert!(diags.is_empty());
}

#[test]
fn test_gregorian_extra_arguments_ignored() {
    // A seven-int constructor is not part of the JDK, but a front end may
    // still resolve one; positions past the seconds argument are skipped.
    let diags = lint_resolved(|b, lib| {
        let ctor = b.declare_constructor(lib.gregorian_calendar, &["int"; 7]);
        let args = vec![b.int(2020), b.int(0), b.int(1), b.int(0), b.int(0), b.int(0), b.int(5000)];
        vec![b.var_decl("c", Some(b.new_object(ctor, args)))]
    });
    assert!(diags.is_empty());
}

// ============================================================================
// Comparisons
// ============================================================================

#[test]
fn test_comparison_operand_order_irrelevant() {
    let diags = lint_resolved(|b, lib| {
        let cal = b.local("cal", JAVA_UTIL_CALENDAR);
        let get = b.call(cal, lib.calendar_get, vec![b.constant(lib.day_of_month)]);
        vec![
            b.expr_stmt(b.eq(get.clone(), b.int(32))),
            b.expr_stmt(b.eq(b.int(32), get)),
        ]
    });
    assert_eq!(
        messages(&diags),
        vec![
            "\"32\" is not a valid value for \"DAY_OF_MONTH\".",
            "\"32\" is not a valid value for \"DAY_OF_MONTH\".",
        ]
    );
}

#[test]
fn test_comparison_inside_if_condition() {
    let diags = lint_resolved(|b, lib| {
        let get_minutes = lib.method(lib.util_date, "getMinutes").unwrap();
        let get = b.call(b.local("d", JAVA_UTIL_DATE), get_minutes, vec![]);
        vec![b.if_stmt(b.ne(get, b.neg(b.int(1))), b.return_stmt(None), None)]
    });
    assert_eq!(messages(&diags), vec!["\"-1\" is not a valid value for \"getMinutes\"."]);
}

#[test]
fn test_comparison_with_other_call_not_flagged() {
    let diags = lint_resolved(|b, lib| {
        let cal = b.local("cal", JAVA_UTIL_CALENDAR);
        let get = b.call(cal, lib.calendar_get, vec![b.constant(lib.day_of_month)]);
        let other = b.call_unresolved(b.ident("this"), "otherCalGetCall", vec![]);
        vec![b.expr_stmt(b.eq(get, other))]
    });
    assert!(diags.is_empty());
}

#[test]
fn test_comparison_get_with_variable_falls_through_to_right() {
    // Left is Calendar.get with a non-constant selector, so the right side
    // is tried as the getter.
    let diags = lint_resolved(|b, lib| {
        let cal = b.local("cal", JAVA_UTIL_CALENDAR);
        let opaque = b.call(cal.clone(), lib.calendar_get, vec![b.local("f", "int")]);
        let month = b.call(cal, lib.calendar_get, vec![b.constant(lib.month)]);
        vec![b.expr_stmt(b.eq(opaque, month))]
    });
    assert!(diags.is_empty());

    let diags = lint_resolved(|b, lib| {
        let cal = b.local("cal", JAVA_UTIL_CALENDAR);
        let opaque = b.call(cal, lib.calendar_get, vec![b.local("f", "int")]);
        vec![b.expr_stmt(b.eq(opaque, b.int(99)))]
    });
    assert!(diags.is_empty());
}

// ============================================================================
// Semantic availability and resolution
// ============================================================================

#[test]
fn test_nothing_reported_without_semantic_model() {
    let diags = lint_unresolved(|b, lib| {
        let cal = b.local("cal", JAVA_UTIL_CALENDAR);
        let set = b.call(cal.clone(), lib.calendar_set, vec![b.constant(lib.month), b.int(12)]);
        let get = b.call(cal, lib.calendar_get, vec![b.constant(lib.month)]);
        let gregorian = lib.gregorian_ctor(3).unwrap();
        let ctor = b.new_object(gregorian, vec![b.int(2020), b.int(12), b.int(1)]);
        vec![
            b.expr_stmt(set),
            b.expr_stmt(b.eq(get, b.int(12))),
            date_setter(b, lib, lib.util_date, "setMonth", b.int(12)),
            b.var_decl("g", Some(ctor)),
        ]
    });
    assert!(diags.is_empty(), "got: {:?}", diags);
}

#[test]
fn test_unresolved_call_not_flagged() {
    let diags = lint_resolved(|b, _| {
        vec![b.expr_stmt(b.call_unresolved(b.ident("d"), "setMonth", vec![b.int(12)]))]
    });
    assert!(diags.is_empty());
}

#[test]
fn test_user_type_with_same_method_name_not_flagged() {
    let diags = lint_resolved(|b, _| {
        let ty = b.declare_type("com.acme.Schedule");
        let set_month = b.declare_method(ty, "setMonth", &["int"]);
        vec![b.expr_stmt(b.call(b.local("s", "com.acme.Schedule"), set_month, vec![b.int(42)]))]
    });
    assert!(diags.is_empty());
}

#[test]
fn test_unqualified_setter_inside_date_subclass_method() {
    // An implicit-receiver call still resolves to java.util.Date.setMonth.
    let diags = lint_resolved(|b, lib| {
        let set_month = lib.method(lib.util_date, "setMonth").unwrap();
        vec![b.expr_stmt(b.call_unqualified(set_month, vec![b.int(13)]))]
    });
    assert_eq!(messages(&diags), vec!["\"13\" is not a valid value for \"setMonth\" method."]);
}

// ============================================================================
// Engine properties
// ============================================================================

#[test]
fn test_linting_is_idempotent() {
    let b = TreeBuilder::new();
    let lib = DateLibrary::declare(&b);
    let cal = b.local("cal", JAVA_UTIL_CALENDAR);
    let stmts = vec![
        b.expr_stmt(b.call(cal.clone(), lib.calendar_set, vec![b.constant(lib.month), b.int(12)])),
        b.expr_stmt(b.eq(b.call(cal, lib.calendar_get, vec![b.constant(lib.second)]), b.int(62))),
    ];
    let unit = b.unit_in_method("Dates", "run", stmts);
    let (interner, model) = b.finish();

    let linter = Linter::new();
    let first = linter.lint_unit(&unit, &interner, Some(&model), "Dates.java");
    let second = linter.lint_unit(&unit, &interner, Some(&model), "Dates.java");
    assert_eq!(first.diagnostics.len(), 2);
    assert_eq!(first.diagnostics, second.diagnostics);
}

#[test]
fn test_linter_shared_across_threads() {
    let linter = Linter::new();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4i64)
            .map(|i| {
                let linter = &linter;
                scope.spawn(move || {
                    let b = TreeBuilder::new();
                    let lib = DateLibrary::declare(&b);
                    let value = 12 + i;
                    let set_month = lib.method(lib.util_date, "setMonth").unwrap();
                    let call = b.call(b.local("d", JAVA_UTIL_DATE), set_month, vec![b.int(value)]);
                    let unit = b.unit(vec![b.expr_stmt(call)]);
                    let (interner, model) = b.finish();
                    linter.lint_unit(&unit, &interner, Some(&model), "Dates.java").diagnostics
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let diags = handle.join().unwrap();
            assert_eq!(diags.len(), 1);
            assert_eq!(
                diags[0].message,
                format!("\"{}\" is not a valid value for \"setMonth\" method.", 12 + i)
            );
        }
    });
}
