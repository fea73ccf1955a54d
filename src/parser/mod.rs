// License: MIT

use indexmap::IndexMap;

use crate::DexError;
use crate::scanner::{self, Line};
use crate::value::Value;

mod coerce;
mod line;

pub(crate) use coerce::coerce_scalar;

/// How an open container installs into its parent once its block closes.
#[derive(Debug)]
enum Attachment {
    /// The root sentinel; never installed anywhere.
    Root,
    /// Appended to the parent frame's list.
    ListItem,
    /// Inserted at this key in the parent frame's map, replacing any
    /// prior value at that key.
    MapKey(String),
}

/// One open block on the indentation stack: the indent of the line that
/// opened it, the container being populated, and where that container
/// goes when the block closes.
#[derive(Debug)]
struct Frame {
    indent: isize,
    container: Value,
    attachment: Attachment,
}

/// Parse a document in the subset notation into a [`Value`] tree.
///
/// The root kind (list vs map) follows the shape of the first non-blank
/// line. Empty input parses to `Value::Null`.
pub fn parse(text: &str) -> Result<Value, DexError> {
    let mut parser = Parser::new();
    for line in scanner::scan(text) {
        parser.feed(&line)?;
    }
    Ok(parser.finish())
}

struct Parser {
    stack: Vec<Frame>,
}

impl Parser {
    fn new() -> Self {
        Parser {
            stack: vec![Frame {
                indent: -1,
                container: Value::Null,
                attachment: Attachment::Root,
            }],
        }
    }

    fn feed(&mut self, line: &Line) -> Result<(), DexError> {
        // A line at the indent that opened the top container is a sibling
        // of that container, not a child, so it closes the container too.
        while self.stack.len() > 1 && line.indent as isize <= self.top().indent {
            self.close_top();
        }
        line::build_node(self, line)
    }

    /// The parent frame for the line being processed.
    fn top(&mut self) -> &mut Frame {
        match self.stack.last_mut() {
            Some(frame) => frame,
            None => unreachable!("the root sentinel persists for the whole parse"),
        }
    }

    fn push(&mut self, indent: usize, container: Value, attachment: Attachment) {
        self.stack.push(Frame {
            indent: indent as isize,
            container,
            attachment,
        });
    }

    /// Close the top frame and install its container into the parent.
    /// This is the single point where a finished block becomes reachable.
    fn close_top(&mut self) {
        if self.stack.len() <= 1 {
            return;
        }
        let Some(frame) = self.stack.pop() else { return };
        let parent = self.top();
        match frame.attachment {
            Attachment::Root => {}
            Attachment::ListItem => {
                if let Value::List(items) = &mut parent.container {
                    items.push(frame.container);
                }
            }
            Attachment::MapKey(key) => {
                if let Value::Map(map) = &mut parent.container {
                    map.insert(key, frame.container);
                }
            }
        }
    }

    fn finish(mut self) -> Value {
        while self.stack.len() > 1 {
            self.close_top();
        }
        match self.stack.pop() {
            Some(root) => root.container,
            None => Value::Null,
        }
    }

    /// Resolve the parent container's kind for a list item. A fresh or
    /// still-empty block becomes a list here; a block that already holds
    /// mapping entries cannot also hold items.
    fn promote_to_list(&mut self, line: &Line) -> Result<(), DexError> {
        let frame = self.top();
        match &frame.container {
            Value::List(_) => Ok(()),
            Value::Null => {
                frame.container = Value::List(Vec::new());
                Ok(())
            }
            Value::Map(map) if map.is_empty() => {
                frame.container = Value::List(Vec::new());
                Ok(())
            }
            _ => Err(DexError::MalformedLine {
                line: line.number,
                text: line.content.to_string(),
            }),
        }
    }

    /// Resolve the parent container's kind for a mapping entry.
    fn require_map(&mut self, line: &Line) -> Result<&mut IndexMap<String, Value>, DexError> {
        let frame = self.top();
        if frame.container.is_null() {
            frame.container = Value::Map(IndexMap::new());
        }
        match &mut frame.container {
            Value::Map(map) => Ok(map),
            _ => Err(DexError::MalformedLine {
                line: line.number,
                text: line.content.to_string(),
            }),
        }
    }

    fn append_item(&mut self, value: Value) {
        if let Value::List(items) = &mut self.top().container {
            items.push(value);
        }
    }
}
