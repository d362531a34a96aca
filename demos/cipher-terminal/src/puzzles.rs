use riddle_engine::{Catalog, PuzzleRecord};

/// Built-in puzzle set for the terminal.
///
/// Descriptions carry `<br>` markup; the host page renders them as HTML.
/// Adding a level means appending a record here with the next level number.
pub fn catalog() -> Catalog {
    Catalog::new(vec![
        PuzzleRecord {
            level: 1,
            title: "The Encrypted Message".to_string(),
            description: "You've intercepted an encrypted message. The code reads: \"IFMMP XPSME\"\
                <br><br>Hint: Each letter has been shifted by 1 position in the alphabet.\
                <br><br>What is the decoded message?"
                .to_string(),
            answer: "HELLO WORLD".to_string(),
        },
        PuzzleRecord {
            level: 2,
            title: "The Binary Code".to_string(),
            description: "A mysterious binary sequence has appeared: \"01001000 01001001\"\
                <br><br>Hint: Binary can be converted to text. Each 8-digit group represents one letter.\
                <br><br>What does it say?"
                .to_string(),
            answer: "HI".to_string(),
        },
    ])
    .expect("built-in catalog is valid")
}
