use pydupes_rs::duplicates::{check_source, find_duplicates};
use pydupes_rs::locator::locate_functions;

#[test]
fn test_detects_duplicate_functions() {
    let code = r#"
class TestModel(models.Model):
    _name = 'test.model'

    def calculate_total(self):
        """First implementation"""
        return self.value * 1.1

    def process_data(self):
        """Process data"""
        pass

    def calculate_total(self):
        """Duplicate - second implementation"""
        return self.value * 1.2

    def calculate_total(self):
        """Duplicate - third implementation"""
        return self.value * 1.3
"#;

    let functions = locate_functions(code);
    let duplicates = find_duplicates(&functions);

    assert_eq!(duplicates.len(), 1, "Should find 1 duplicate function name");
    assert_eq!(duplicates[0].name, "calculate_total");
    assert_eq!(duplicates[0].occurrences.len(), 3);

    let starts: Vec<usize> = duplicates[0]
        .occurrences
        .iter()
        .map(|f| f.start_line)
        .collect();
    assert_eq!(starts, vec![4, 12, 16], "Occurrences should keep file order");
}

#[test]
fn test_no_duplicates_when_all_unique() {
    let code = r#"
class TestModel(models.Model):
    _name = 'test.model'

    def calculate_total(self):
        """Calculate total"""
        return self.value * 1.1

    def process_data(self):
        """Process data"""
        pass

    def validate_input(self):
        """Validate input"""
        return True
"#;

    let functions = locate_functions(code);
    let duplicates = find_duplicates(&functions);

    assert_eq!(functions.len(), 3, "Should find 3 functions");
    assert!(duplicates.is_empty(), "Should not find any duplicates");
}

#[test]
fn test_empty_source_has_no_duplicates() {
    assert!(locate_functions("").is_empty());
    assert!(check_source("").is_empty());
}

#[test]
fn test_groups_in_first_seen_order() {
    let code = r#"
def save():
    pass

def load():
    pass

def load():
    pass

def save():
    pass
"#;

    let duplicates = check_source(code);
    let names: Vec<&str> = duplicates.iter().map(|g| g.name.as_str()).collect();

    // `save` is seen first even though `load` repeats first.
    assert_eq!(names, vec!["save", "load"]);
    for group in &duplicates {
        assert_eq!(group.occurrences.len(), 2);
    }
}

#[test]
fn test_same_name_in_different_classes_counts() {
    let code = r#"
class A:
    def run(self):
        pass

class B:
    def run(self):
        pass
"#;

    let duplicates = check_source(code);
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].name, "run");
}

#[test]
fn test_snippets_do_not_affect_grouping() {
    let code = "def f(a):\n    return a\n\ndef f(a, b):\n    return a + b\n";
    let duplicates = check_source(code);

    assert_eq!(duplicates.len(), 1);
    assert_ne!(
        duplicates[0].occurrences[0].definition,
        duplicates[0].occurrences[1].definition
    );
}

#[test]
fn test_every_group_has_two_or_more() {
    let code = "def a():\ndef b():\ndef a():\ndef c():\ndef a():\ndef b():\n";
    let duplicates = check_source(code);

    assert_eq!(duplicates.len(), 2);
    assert!(duplicates.iter().all(|g| g.occurrences.len() >= 2));
    assert_eq!(duplicates[0].occurrences.len(), 3);
}
