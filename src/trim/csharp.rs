//! Trimming rules for .NET and Unity frames.
//!
//! Unity reports `Namespace.Type.Method[T] (ArgType arg, ...)`: no return
//! type, a space before the parameter list, and square-bracket generic
//! markers that belong to the method name.

use super::enclosed::find_spans;

/// Strip the trailing parameter list, keeping `[T]` generic markers.
pub fn trim_csharp(function: &str) -> String {
    if function.trim().is_empty() {
        return function.to_string();
    }
    let trimmed = function.trim_end();
    match find_spans(trimmed, '(', ')').last() {
        Some(span) if span.end == trimmed.len() => trimmed[..span.start].trim_end().to_string(),
        _ => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_parameter_list() {
        assert_eq!(
            trim_csharp("UnityEngine.Events.InvokableCall.Invoke ()"),
            "UnityEngine.Events.InvokableCall.Invoke"
        );
    }

    #[test]
    fn test_generic_marker_survives() {
        assert_eq!(
            trim_csharp(
                "UnityEngine.EventSystems.ExecuteEvents.Execute[T] (UnityEngine.GameObject target, UnityEngine.EventSystems.BaseEventData eventData, UnityEngine.EventSystems.ExecuteEvents+EventFunction`1[T1] functor)"
            ),
            "UnityEngine.EventSystems.ExecuteEvents.Execute[T]"
        );
    }

    #[test]
    fn test_name_without_parameters_is_unchanged() {
        assert_eq!(trim_csharp("Program.Main"), "Program.Main");
    }

    #[test]
    fn test_blank_input_is_unchanged() {
        assert_eq!(trim_csharp(""), "");
        assert_eq!(trim_csharp("   "), "   ");
        assert_eq!(trim_csharp(" \t "), " \t ");
    }

    #[test]
    fn test_unbalanced_parameter_list_is_unchanged() {
        assert_eq!(trim_csharp("Program.Main (string[] args"), "Program.Main (string[] args");
    }
}
