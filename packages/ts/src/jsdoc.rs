// JSDoc Model
//
// Documentation blocks attached to declarations.

/// A single JSDoc tag. `text` is the raw remainder after the tag name and may
/// still contain the trailing newline-plus-indentation artifact the parser
/// leaves behind on multi-line blocks; consumers are expected to trim it.
#[derive(Debug, Clone)]
pub struct JsDocTag {
    pub tag_name: String,
    pub text: String,
}

/// A documentation block: leading description plus ordered tags.
#[derive(Debug, Clone, Default)]
pub struct JsDoc {
    pub description: String,
    pub tags: Vec<JsDocTag>,
}

impl JsDoc {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag_name: impl Into<String>, text: impl Into<String>) -> Self {
        self.tags.push(JsDocTag {
            tag_name: tag_name.into(),
            text: text.into(),
        });
        self
    }

    /// First tag with the given name, if any.
    pub fn tag(&self, tag_name: &str) -> Option<&JsDocTag> {
        self.tags.iter().find(|tag| tag.tag_name == tag_name)
    }

    pub fn has_tag(&self, tag_name: &str) -> bool {
        self.tag(tag_name).is_some()
    }
}
