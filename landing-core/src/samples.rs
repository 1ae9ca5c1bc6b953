//! Code samples shown in the hero code window.

use crate::error::{LandingError, Result};

/// One tab's worth of code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSample {
    /// Key used by tab controls (`data-tab`).
    pub id: &'static str,
    /// Text shown on the tab control.
    pub label: &'static str,
    pub code: &'static str,
    /// Class applied to the code panel for syntax colouring.
    pub style_class: &'static str,
}

const JAVA: CodeSample = CodeSample {
    id: "java",
    label: "Java",
    code: r#"public class HelloWorld {
    public static void main(String[] args) {
        System.out.println("Hello World");
        // Welcome to coding!
    }
}"#,
    style_class: "code-java",
};

const PYTHON: CodeSample = CodeSample {
    id: "python",
    label: "Python",
    code: r#"def main():
    print("Hello World")
    # Welcome to coding!

if __name__ == "__main__":
    main()"#,
    style_class: "code-python",
};

const CPP: CodeSample = CodeSample {
    id: "cpp",
    label: "C++",
    code: r#"#include <iostream>
using namespace std;
int main() {
    cout << "Hello World" << endl;
    // Welcome to coding!
    return 0;
}"#,
    style_class: "code-cpp",
};

/// Fixed, ordered set of samples. Order doubles as the rotation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleCatalog {
    samples: Vec<CodeSample>,
}

impl SampleCatalog {
    /// Catalog with at least one sample. Duplicate ids keep the first entry.
    pub fn new(samples: impl IntoIterator<Item = CodeSample>) -> Option<Self> {
        let mut unique: Vec<CodeSample> = Vec::new();
        for sample in samples {
            if !unique.iter().any(|s| s.id == sample.id) {
                unique.push(sample);
            }
        }
        (!unique.is_empty()).then_some(Self { samples: unique })
    }

    /// Java, Python, C++.
    pub fn builtin() -> Self {
        Self {
            samples: vec![JAVA, PYTHON, CPP],
        }
    }

    pub fn get(&self, id: &str) -> Option<&CodeSample> {
        self.samples.iter().find(|s| s.id == id)
    }

    pub fn position(&self, id: &str) -> Result<usize> {
        self.samples
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| LandingError::UnknownTab(id.to_string()))
    }

    pub fn at(&self, index: usize) -> &CodeSample {
        &self.samples[index % self.samples.len()]
    }

    /// Index after `index`, wrapping to the first sample.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.samples.len()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CodeSample> {
        self.samples.iter()
    }
}

impl Default for SampleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_order_is_java_python_cpp() {
        let ids: Vec<_> = SampleCatalog::builtin().iter().map(|s| s.id).collect();
        assert_eq!(ids, ["java", "python", "cpp"]);
    }

    #[test]
    fn next_index_wraps() {
        let catalog = SampleCatalog::builtin();
        assert_eq!(catalog.next_index(0), 1);
        assert_eq!(catalog.next_index(2), 0);
    }

    #[test]
    fn unknown_id_is_rejected() {
        let err = SampleCatalog::builtin().position("rust").unwrap_err();
        assert!(matches!(err, LandingError::UnknownTab(ref id) if id == "rust"));
    }

    #[test]
    fn new_rejects_empty_and_dedups() {
        assert!(SampleCatalog::new([]).is_none());
        let catalog = SampleCatalog::new([PYTHON, JAVA, PYTHON]).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.at(0).id, "python");
    }

    #[test]
    fn samples_carry_their_style_class() {
        let catalog = SampleCatalog::builtin();
        assert_eq!(catalog.get("cpp").map(|s| s.style_class), Some("code-cpp"));
        assert!(catalog.get("python").unwrap().code.contains("print(\"Hello World\")"));
    }
}
