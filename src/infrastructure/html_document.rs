//! 基于 `scraper` 的 HTML 文档实现

use scraper::{ElementRef, Html};
use std::iter;

use super::{MarkupDocument, MarkupNode};

/// 解析后的 HTML 文档
///
/// html5ever 对任意输入都能容错解析，这里不会失败。
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// 解析原始 HTML 文本
    pub fn parse(document_text: &str) -> Self {
        Self {
            html: Html::parse_document(document_text),
        }
    }
}

impl MarkupDocument for HtmlDocument {
    type Node<'a> = HtmlNode<'a>;

    fn root(&self) -> HtmlNode<'_> {
        HtmlNode(self.html.root_element())
    }
}

/// HTML 元素句柄
#[derive(Clone, Copy, Debug)]
pub struct HtmlNode<'a>(ElementRef<'a>);

impl<'a> MarkupNode<'a> for HtmlNode<'a> {
    fn tag(&self) -> &'a str {
        self.0.value().name()
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.value().classes().any(|c| c == class)
    }

    fn raw_text(&self) -> String {
        self.0.text().collect()
    }

    fn descendants(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
        Box::new(
            self.0
                .descendants()
                .skip(1)
                .filter_map(ElementRef::wrap)
                .map(HtmlNode),
        )
    }

    fn next_siblings(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
        Box::new(
            self.0
                .next_siblings()
                .filter_map(ElementRef::wrap)
                .map(HtmlNode),
        )
    }

    fn following(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
        let node = *self.0;
        let after = iter::once(node)
            .chain(node.ancestors())
            .flat_map(|n| n.next_siblings())
            .flat_map(|sibling| sibling.descendants());

        Box::new(
            node.descendants()
                .skip(1)
                .chain(after)
                .filter_map(ElementRef::wrap)
                .map(HtmlNode),
        )
    }
}
