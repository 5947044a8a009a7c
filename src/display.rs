//! Console rendering for ordered sequences.
//!
//! Sequences render bracketed and comma separated, `[1, 2, 3]`.
//! Record-like element types keep their own `Display` convention,
//! `TypeName(field1, field2, ...)`.

/// Adapter displaying a slice as `[a, b, c]`.
pub struct Bracketed<'a, T>(&'a [T]);

impl<'a, T> Bracketed<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Bracketed(items)
    }
}

impl<T> std::fmt::Display for Bracketed<'_, T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (index, item) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pipeline;

    #[derive(Clone)]
    struct Person {
        name: String,
        age: i32,
    }

    impl Person {
        fn new(name: &str, age: i32) -> Self {
            Person {
                name: name.to_string(),
                age,
            }
        }
    }

    impl std::fmt::Display for Person {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "Person({}, {})", self.name, self.age)
        }
    }

    #[test]
    fn renders_numbers_bracketed() {
        let pipeline = Pipeline::from_slice(&[1, 1, 2, 3, 5, 8, 13]);
        assert_eq!(pipeline.display().to_string(), "[1, 1, 2, 3, 5, 8, 13]");
    }

    #[test]
    fn renders_empty_sequence() {
        let empty: &[i32] = &[];
        assert_eq!(Bracketed::new(empty).to_string(), "[]");
    }

    #[test]
    fn renders_single_element_without_separator() {
        assert_eq!(Bracketed::new(&[7]).to_string(), "[7]");
    }

    #[test]
    fn renders_records_sorted_by_field() {
        let mut persons = Pipeline::from(vec![
            Person::new("Alice", 10),
            Person::new("Bob", 8),
            Person::new("Charles", 42),
        ]);

        persons.sort(|a, b| a.name > b.name);
        assert_eq!(
            persons.display().to_string(),
            "[Person(Charles, 42), Person(Bob, 8), Person(Alice, 10)]"
        );

        persons.sort(|a, b| a.age < b.age);
        assert_eq!(
            persons.display().to_string(),
            "[Person(Bob, 8), Person(Alice, 10), Person(Charles, 42)]"
        );
    }
}
