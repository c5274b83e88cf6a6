//! Documentation content for zonespec CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Operators,
    Predicates,
    Zones,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" | "literals" => Some(Self::Syntax),
            "operators" | "ops" => Some(Self::Operators),
            "predicates" | "predicate" | "functions" => Some(Self::Predicates),
            "zones" | "zone" | "priority" => Some(Self::Zones),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"ZONESPEC DOCUMENTATION

A zone specification is a boolean expression over locations. It combines
predicate calls such as biome("DESERT") or circle(0, 0, 500) with the
operators !, &, ^ and |. A location belongs to the zone when the
expression is true there.

DOCUMENTATION CATEGORIES

  syntax            Tokens, string and number literals
  operators         Combinators and their precedence
  predicates        Every predicate and its arguments
  zones             Priorities, tie-breaking and the fallback zone

QUICK REFERENCE

  biome("NAME")     In a biome
  world("NAME")     In a world
  circle(x,z,r)     Within r blocks of (x,z)
  rect(x1,z1,x2,z2) Inside a rectangle
  !a  a & b         Not, and
  a ^ b  a | b      Exclusive or, or

Run 'zonespec docs <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Operators) => Ok(OPERATORS_DOC),
        Some(DocCategory::Predicates) => Ok(PREDICATES_DOC),
        Some(DocCategory::Zones) => Ok(ZONES_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX

TOKENS
  (  )  ,           Grouping and argument lists
  !  &  ^  |        Operators (see 'zonespec docs operators')
  name              Predicate name: letters only
  "text"            String: anything up to the next double quote
  42  -500  0.25    Number: optional sign, digits, optional fraction

Whitespace between tokens is ignored, including newlines.

STRINGS
  There are no escape sequences. A backslash is an ordinary character and
  a string cannot contain a double quote.

    biome("END_BARRENS")
    world("C:\worlds\main")

NUMBERS
  +5      same as 5
  -500    negative
  0.25    at most one zero before the decimal point
  007     error: too many leading zeroes
  .5      error: write 0.5
  10.     same as 10
  --5     error: more than one sign

ERRORS
  Every error names a column, counted in characters from 1:

    $ zonespec check 'circle(0, 0, 0.5.)'
    lex error at column 17: unexpected character: '.'
"#;

const OPERATORS_DOC: &str = r#"OPERATORS

From tightest to loosest binding:

  !a        Not: where a does not hold
  a & b     And: where both hold
  a ^ b     Xor: where exactly one holds
  a | b     Or: where either holds

Binary operators are left-associative. Use parentheses to group:

  biome("DESERT") & circle(0,0,100) | circle(500,500,100)
    means (biome("DESERT") & circle(0,0,100)) | circle(500,500,100)

  biome("DESERT") & (circle(0,0,100) | circle(500,500,100))
    desert parts of either circle

EVALUATION
  & and | stop as soon as the result is known, left operand first.
  ^ and ! always evaluate their operands.
"#;

const PREDICATES_DOC: &str = r#"PREDICATES

Names are case-sensitive.

  all()
      Every location.

  biome("A", "B", ...)
      The location's biome is one of the names. Case is ignored.

  world("A", "B", ...)
      The location is in one of the named worlds. Case matters.

  circle(x, z, radius)
      Horizontal distance from (x, z) is at most radius. radius >= 0.

  donut(x, z, inner, outer)
      Horizontal distance from (x, z) is between inner and outer,
      inclusive. 0 <= inner <= outer.

  rect(x1, z1, x2, z2)
      Inside the rectangle with corners (x1, z1) and (x2, z2), edges
      included. Corners may be given in either order.

  y(min, max)
      Height is between min and max, inclusive, in either order.

Unknown names, the wrong number of arguments, a string where a number is
expected (or the reverse) and out-of-range values are all reported when
the zone is defined, never while the server is running.
"#;

const ZONES_DOC: &str = r#"ZONES

A zone is a named specification with a priority. Ids are made of letters,
digits, '_', '.' and '-', and compared ignoring case.

RESOLUTION
  For a location, every zone's specification is tested. Among the zones
  that match, the one with the highest priority governs the location. If
  two matching zones have the same priority, the one defined most recently
  wins.

  If no zone matches, the fallback zone 'default' governs. It matches
  everywhere, ranks below every other zone and cannot be removed. Its
  priority, -2147483648, cannot be given to any other zone.

EDITING
  Re-defining a zone replaces its specification in one step and keeps its
  priority. A specification that fails to compile leaves the zone as it
  was.

ZONE FILES
  {
    "zones": [
      { "id": "barrens", "priority": 10,
        "spec": "biome(\"END_BARRENS\") & circle(1000, 1000, 200)" },
      { "id": "overworld", "spec": "world(\"world\")" }
    ]
  }

    $ zonespec resolve --zones zones.json --world world_the_end \
        --biome END_BARRENS 1000 64 1000
    barrens
"#;
