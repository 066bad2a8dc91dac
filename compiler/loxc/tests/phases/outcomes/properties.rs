use proptest::prelude::*;

use crate::common::output;

fn program(values: &[i32]) -> String {
    let mut source = String::from("var total = 0;\n");
    for value in values {
        source.push_str(&format!("total = total + {value};\nprint total;\n"));
    }
    source.push_str("fun twice(x) { return x * 2; }\nprint twice(total);\n");
    source
}

proptest! {
    #[test]
    fn prop_runs_are_deterministic(values in prop::collection::vec(0i32..1000, 0..20)) {
        let source = program(&values);
        prop_assert_eq!(output(&source), output(&source));
    }

    #[test]
    fn prop_running_total_matches_host(values in prop::collection::vec(0i32..1000, 1..20)) {
        let out = output(&program(&values));
        let lines: Vec<&str> = out.lines().collect();
        let mut total = 0.0_f64;
        for (value, line) in values.iter().zip(&lines) {
            total += f64::from(*value);
            prop_assert_eq!(*line, total.to_string());
        }
        let doubled = (total * 2.0).to_string();
        prop_assert_eq!(lines.last().copied(), Some(doubled.as_str()));
    }
}
