//! Various test utils.

use crate::CompletionItem;
use crate::Schema;

/// A small Star Wars schema shared by the cursor service tests.
pub const STAR_WARS_SDL: &str = r#"
"""A character in the Star Wars Trilogy."""
interface Character {
  id: String!
  name: String
  friends: [Character]
  appearsIn: [Episode]
}

"""One of the films in the Star Wars Trilogy."""
enum Episode {
  """Released in 1977."""
  NEWHOPE
  """Released in 1980."""
  EMPIRE
  """Released in 1983."""
  JEDI
  HOLIDAY_SPECIAL @deprecated(reason: "Never aired again.")
}

"""A humanoid creature."""
type Human implements Character {
  id: String!
  name: String
  friends: [Character]
  appearsIn: [Episode]
  homePlanet: String
}

"""A mechanical creature."""
type Droid implements Character {
  id: String!
  name: String
  friends: [Character]
  appearsIn: [Episode]
  primaryFunction: String
}

input InputType {
  key: String!
  value: Int
  obj: InputType
}

type Query {
  """Finds the hero of a film."""
  hero(episode: Episode): Character
  human(id: String!): Human
  droid(id: String!): Droid
  find(text: String!, limit: Int = 10): [Character]
  inputTypeTest(args: InputType): Character
  leader: Character @deprecated(reason: "Use `hero`.")
}

type Mutation {
  rename(id: String!, name: String!): Character
}

directive @onArg on ARGUMENT_DEFINITION
"#;

pub fn star_wars_schema() -> Schema {
    STAR_WARS_SDL.parse().unwrap()
}

/// The position just after the last character of `text`.
pub fn end_of(text: &str) -> crate::Position {
    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.last().copied().unwrap_or_default();
    crate::Position::new(lines.len() - 1, last.chars().count())
}

pub fn labels(items: &[CompletionItem]) -> Vec<&str> {
    items.iter().map(|item| item.label.as_str()).collect()
}
