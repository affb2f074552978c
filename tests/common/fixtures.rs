use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Console {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Developer {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Character {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Game {
    pub id: u32,
    pub name: String,
    pub console: Console,
    pub developer: Developer,
    pub characters: Vec<Character>,
}

/// The game used throughout the scenario tests.
pub fn star_fox() -> Game {
    Game {
        id: 1,
        name: "Star Fox".to_string(),
        console: Console {
            id: 1,
            name: "SNES".to_string(),
        },
        developer: Developer {
            id: 1,
            name: "Nintendo EAD".to_string(),
        },
        characters: vec![
            Character {
                id: 1,
                name: "Fox McCloud".to_string(),
            },
            Character {
                id: 2,
                name: "Falco Lombardi".to_string(),
            },
        ],
    }
}

pub fn star_fox_json() -> Value {
    serde_json::to_value(star_fox()).expect("fixture serializes")
}

/// A homogeneous list of `count` games.
pub fn game_list(count: u32) -> Value {
    let games: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "Id": i,
                "Name": format!("Game {}", i),
                "Developer": { "Id": i % 7, "Name": format!("Studio {}", i % 7) },
                "Characters": [
                    { "Id": 1, "Name": "Hero", "Stats": { "Speed": 3, "Power": 5 } },
                    { "Id": 2, "Name": "Sidekick", "Stats": { "Speed": 4, "Power": 2 } }
                ]
            })
        })
        .collect();
    Value::Array(games)
}

/// The nested list served by the original demo application's home page.
pub fn foo_bar_list() -> Value {
    json!([
        { "Foo": 1, "Bar": { "Baz": 2, "Qux": 3 } },
        { "Foo": 2, "Bar": { "Baz": 3, "Qux": 4 } },
        { "Foo": 3, "Bar": { "Baz": 5, "Qux": 6 } }
    ])
}
