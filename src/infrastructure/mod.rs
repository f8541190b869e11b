//! 文档模型适配层 - 基础设施层
//!
//! 只暴露"查询文档树"的能力，不认识考生、分区、题目。
//!
//! 抽取器只依赖 [`MarkupNode`] 这一组最小能力：
//! - 按 tag + class 查找（子树内第一个 / 全部）
//! - 取元素文本
//! - 按文本谓词查找表格行
//! - 查找下一个兄弟元素 / 文档顺序中的下一个元素
//!
//! 真实 HTML 由 [`HtmlDocument`]（`scraper`）提供，测试中可以用
//! [`SyntheticDocument`] 手工搭一棵树。

pub mod html_document;
pub mod synthetic;

pub use html_document::{HtmlDocument, HtmlNode};
pub use synthetic::{ElementSpec, SyntheticDocument, SyntheticNode};

/// 文档树中的一个元素句柄
///
/// 实现者只需提供基础遍历，查询方法都有默认实现。
pub trait MarkupNode<'a>: Copy + 'a {
    /// 标签名（小写）
    fn tag(&self) -> &'a str;

    /// 是否带有指定 class
    fn has_class(&self, class: &str) -> bool;

    /// 元素内所有文本节点按顺序拼接（不做 trim）
    fn raw_text(&self) -> String;

    /// 子树内的所有元素，文档顺序，不含自身
    fn descendants(&self) -> Box<dyn Iterator<Item = Self> + 'a>;

    /// 自身之后的兄弟元素
    fn next_siblings(&self) -> Box<dyn Iterator<Item = Self> + 'a>;

    /// 文档顺序中位于自身开始标签之后的所有元素（先是自己的子树，再是后续节点）
    fn following(&self) -> Box<dyn Iterator<Item = Self> + 'a>;

    /// 去掉首尾空白后的文本
    fn text(&self) -> String {
        self.raw_text().trim().to_string()
    }

    fn matches(&self, tag: &str, class: Option<&str>) -> bool {
        self.tag() == tag && class.map_or(true, |c| self.has_class(c))
    }

    /// 子树内第一个匹配的元素
    fn find_first(&self, tag: &str, class: Option<&str>) -> Option<Self> {
        self.descendants().find(|n| n.matches(tag, class))
    }

    /// 子树内所有匹配的元素
    fn find_all(&self, tag: &str, class: Option<&str>) -> Vec<Self> {
        self.descendants().filter(|n| n.matches(tag, class)).collect()
    }

    /// 子树内第一个文本满足谓词的 `tr`
    fn find_row<P>(&self, predicate: P) -> Option<Self>
    where
        P: Fn(&str) -> bool,
    {
        self.descendants()
            .filter(|n| n.tag() == "tr")
            .find(|row| predicate(&row.raw_text()))
    }

    /// 子树内第一个 trim 后文本恰好等于 `text` 的元素
    fn find_by_text(&self, tag: &str, text: &str) -> Option<Self> {
        self.descendants()
            .filter(|n| n.tag() == tag)
            .find(|n| n.text() == text)
    }

    /// 下一个指定标签的兄弟元素
    fn next_sibling(&self, tag: &str) -> Option<Self> {
        self.next_siblings().find(|n| n.tag() == tag)
    }

    /// 文档顺序中下一个匹配的元素
    fn find_next(&self, tag: &str, class: Option<&str>) -> Option<Self> {
        self.following().find(|n| n.matches(tag, class))
    }
}

/// 可查询的文档
pub trait MarkupDocument {
    type Node<'a>: MarkupNode<'a>
    where
        Self: 'a;

    /// 根元素
    fn root(&self) -> Self::Node<'_>;
}
