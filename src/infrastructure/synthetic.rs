//! 内存中的合成文档树
//!
//! 不经过 HTML 解析器，直接用 [`ElementSpec`] 描述元素层级，
//! 便于在测试里构造各种缺锚点 / 畸形题目的场景。
//!
//! ```
//! use exam_report_scorer::infrastructure::{ElementSpec, MarkupDocument, MarkupNode, SyntheticDocument};
//!
//! let doc = SyntheticDocument::build(
//!     ElementSpec::new("div").child(ElementSpec::new("span").class("bold").text("Section A")),
//! );
//! let label = doc.root().find_first("span", Some("bold")).unwrap();
//! assert_eq!(label.text(), "Section A");
//! ```

use super::{MarkupDocument, MarkupNode};

/// 元素描述（构建器）
#[derive(Debug, Clone, Default)]
pub struct ElementSpec {
    tag: String,
    classes: Vec<String>,
    text: String,
    children: Vec<ElementSpec>,
}

impl ElementSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// 元素自身的文本（排在所有子元素文本之前）
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = ElementSpec>) -> Self {
        self.children.extend(children);
        self
    }
}

#[derive(Debug)]
struct Slot {
    tag: String,
    classes: Vec<String>,
    text: String,
    parent: Option<usize>,
    children: Vec<usize>,
    /// 子树结束位置（不含），前序编号下子树为 `id + 1..end`
    end: usize,
}

/// 合成文档：按前序存储的元素数组
#[derive(Debug)]
pub struct SyntheticDocument {
    slots: Vec<Slot>,
}

impl SyntheticDocument {
    /// 以 `root` 为根构建文档
    pub fn build(root: ElementSpec) -> Self {
        let mut doc = Self { slots: Vec::new() };
        doc.push(root, None);
        doc
    }

    fn push(&mut self, element: ElementSpec, parent: Option<usize>) -> usize {
        let id = self.slots.len();
        self.slots.push(Slot {
            tag: element.tag,
            classes: element.classes,
            text: element.text,
            parent,
            children: Vec::new(),
            end: id + 1,
        });

        for child in element.children {
            let child_id = self.push(child, Some(id));
            self.slots[id].children.push(child_id);
        }

        self.slots[id].end = self.slots.len();
        id
    }
}

impl MarkupDocument for SyntheticDocument {
    type Node<'a> = SyntheticNode<'a>;

    fn root(&self) -> SyntheticNode<'_> {
        SyntheticNode { doc: self, id: 0 }
    }
}

/// 合成文档中的元素句柄
#[derive(Clone, Copy, Debug)]
pub struct SyntheticNode<'a> {
    doc: &'a SyntheticDocument,
    id: usize,
}

impl<'a> SyntheticNode<'a> {
    fn slot(&self) -> &'a Slot {
        &self.doc.slots[self.id]
    }

    fn at(&self, id: usize) -> Self {
        Self { doc: self.doc, id }
    }
}

impl<'a> MarkupNode<'a> for SyntheticNode<'a> {
    fn tag(&self) -> &'a str {
        &self.slot().tag
    }

    fn has_class(&self, class: &str) -> bool {
        self.slot().classes.iter().any(|c| c == class)
    }

    fn raw_text(&self) -> String {
        let slots = &self.doc.slots[self.id..self.slot().end];
        slots.iter().map(|s| s.text.as_str()).collect()
    }

    fn descendants(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
        let this = *self;
        Box::new((self.id + 1..self.slot().end).map(move |id| this.at(id)))
    }

    fn next_siblings(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
        let this = *self;
        let siblings: &'a [usize] = match self.slot().parent {
            Some(parent) => self.doc.slots[parent].children.as_slice(),
            None => &[],
        };
        Box::new(
            siblings
                .iter()
                .skip_while(move |&&id| id != this.id)
                .skip(1)
                .map(move |&id| this.at(id)),
        )
    }

    fn following(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
        let this = *self;
        Box::new((self.id + 1..self.doc.slots.len()).map(move |id| this.at(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SyntheticDocument {
        SyntheticDocument::build(
            ElementSpec::new("table").children([
                ElementSpec::new("tr").children([
                    ElementSpec::new("td").text("Status :"),
                    ElementSpec::new("td").class("bold").text("Answered"),
                ]),
                ElementSpec::new("tr").children([
                    ElementSpec::new("td").text("Chosen Option :"),
                    ElementSpec::new("td").text("2"),
                ]),
            ]),
        )
    }

    #[test]
    fn test_raw_text_concatenates_subtree_in_order() {
        let doc = sample();
        let rows = doc.root().find_all("tr", None);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].raw_text(), "Status :Answered");
    }

    #[test]
    fn test_next_sibling_and_find_next() {
        let doc = sample();
        let root = doc.root();

        let chosen = root.find_by_text("td", "Chosen Option :").unwrap();
        assert_eq!(chosen.next_sibling("td").unwrap().text(), "2");

        let status_row = root.find_row(|t| t.contains("Status")).unwrap();
        assert_eq!(status_row.find_next("td", Some("bold")).unwrap().text(), "Answered");

        // 最后一个单元格之后没有元素
        let last = root.find_by_text("td", "2").unwrap();
        assert!(last.next_sibling("td").is_none());
        assert!(last.find_next("td", None).is_none());
    }
}
