use serde::{Deserialize, Serialize};

/// Supported submission languages.
///
/// Selecting a language never validates that existing code matches it; the
/// set only drives the editor sample and the backend request payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Python,
    Javascript,
    Java,
    Cpp,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Python,
        Language::Javascript,
        Language::Java,
        Language::Cpp,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::Javascript => "JavaScript",
            Language::Java => "Java",
            Language::Cpp => "C++",
        }
    }

    /// Fixed starter snippet shown when the editor is empty.
    pub fn sample_code(&self) -> &'static str {
        match self {
            Language::Python => SAMPLE_PYTHON,
            Language::Javascript => SAMPLE_JAVASCRIPT,
            Language::Java => SAMPLE_JAVA,
            Language::Cpp => SAMPLE_CPP,
        }
    }
}

const SAMPLE_PYTHON: &str = r#"def calculate_total(items):
    total = 0
    for item in items:
        total = total + item['price']
    return total

# Example usage
items = [{'price': 10}, {'price': 20}]
print(calculate_total(items))"#;

const SAMPLE_JAVASCRIPT: &str = r#"function calculateTotal(items) {
  let total = 0;
  for (let i = 0; i < items.length; i++) {
    total = total + items[i].price;
  }
  return total;
}

// Example usage
const items = [{price: 10}, {price: 20}];
console.log(calculateTotal(items));"#;

const SAMPLE_JAVA: &str = r#"public class Calculator {
    public static int calculateTotal(int[] items) {
        int total = 0;
        for (int i = 0; i < items.length; i++) {
            total = total + items[i];
        }
        return total;
    }

    public static void main(String[] args) {
        int[] items = {10, 20, 30};
        System.out.println(calculateTotal(items));
    }
}"#;

const SAMPLE_CPP: &str = r#"#include <iostream>
#include <vector>

int calculateTotal(std::vector<int> items) {
    int total = 0;
    for (int i = 0; i < items.size(); i++) {
        total = total + items[i];
    }
    return total;
}

int main() {
    std::vector<int> items = {10, 20, 30};
    std::cout << calculateTotal(items) << std::endl;
    return 0;
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Language::Javascript).unwrap(),
            "\"javascript\""
        );
        assert_eq!(serde_json::to_string(&Language::Cpp).unwrap(), "\"cpp\"");
    }

    #[test]
    fn every_language_has_a_distinct_sample() {
        for (i, a) in Language::ALL.iter().enumerate() {
            assert!(!a.sample_code().trim().is_empty());
            for b in Language::ALL.iter().skip(i + 1) {
                assert_ne!(a.sample_code(), b.sample_code());
            }
        }
    }

    #[test]
    fn default_language_is_python() {
        assert_eq!(Language::default(), Language::Python);
    }
}
