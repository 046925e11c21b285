//! 题解提取服务 - 业务能力层
//!
//! 只负责从题解页面中解析出题目链接和 Java 代码

use crate::models::Extraction;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// 付费题标记（不区分大小写）
pub const PAYWALL_MARKER: &str = "premium";
/// 目标语言标签
pub const TARGET_LANGUAGE: &str = "Java";

/// 题解提取服务
///
/// 页面结构：
/// - 第一个 `h1` 里的链接指向判题平台上的题目
/// - 每个 `div.tabbed-set` 是一组多语言代码，`label` 与 `div.tabbed-block` 按位置一一对应
pub struct SolutionExtractor {
    heading: Selector,
    link: Selector,
    tabbed_set: Selector,
    label: Selector,
    tabbed_block: Selector,
    code: Selector,
}

impl SolutionExtractor {
    /// 创建新的提取服务
    pub fn new() -> Self {
        Self {
            heading: Selector::parse("h1").expect("Invalid selector"),
            link: Selector::parse("a[href]").expect("Invalid selector"),
            tabbed_set: Selector::parse("div.tabbed-set").expect("Invalid selector"),
            label: Selector::parse("label").expect("Invalid selector"),
            tabbed_block: Selector::parse("div.tabbed-block").expect("Invalid selector"),
            code: Selector::parse("code").expect("Invalid selector"),
        }
    }

    /// 解析题解页面
    ///
    /// # 参数
    /// - `html`: 页面原文
    ///
    /// # 返回
    /// - 没有标题或标题里没有链接：(None, None)
    /// - 付费题或找不到 Java 代码：(链接, None)
    /// - 否则：(链接, 代码)
    pub fn extract(&self, html: &str) -> Extraction {
        let document = Html::parse_document(html);

        let Some(problem_url) = self.problem_url(&document) else {
            debug!("页面中没有带链接的标题");
            return Extraction::missing();
        };

        if self.is_paywalled(&document) {
            debug!("付费题: {}", problem_url);
            return Extraction::url_only(problem_url);
        }

        match document
            .select(&self.tabbed_set)
            .find_map(|set| self.code_in_set(set))
        {
            Some(code) => Extraction::complete(problem_url, code),
            None => Extraction::url_only(problem_url),
        }
    }

    fn problem_url(&self, document: &Html) -> Option<String> {
        let heading = document.select(&self.heading).next()?;
        let link = heading.select(&self.link).next()?;
        link.value().attr("href").map(str::to_string)
    }

    fn is_paywalled(&self, document: &Html) -> bool {
        document
            .root_element()
            .text()
            .collect::<String>()
            .to_lowercase()
            .contains(PAYWALL_MARKER)
    }

    /// 在一组标签页里找 Java 代码
    ///
    /// 代码块少于标签位置时跳过这一组
    fn code_in_set(&self, set: ElementRef<'_>) -> Option<String> {
        let position = set
            .select(&self.label)
            .position(|label| label.text().collect::<String>().contains(TARGET_LANGUAGE))?;

        let block = set.select(&self.tabbed_block).nth(position)?;
        let code: String = block.select(&self.code).next()?.text().collect();

        if code.trim().is_empty() {
            None
        } else {
            Some(code)
        }
    }
}

impl Default for SolutionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SUM_PAGE: &str = r#"
        <html><body>
          <h1><a href="https://platform.example/problems/two-sum/">1. Two Sum</a></h1>
          <div class="tabbed-set">
            <label>C++</label><label>Java</label><label>Python</label>
            <div class="tabbed-content">
              <div class="tabbed-block"><pre><code>class Solution { public: };</code></pre></div>
              <div class="tabbed-block"><pre><code>class Solution {}</code></pre></div>
              <div class="tabbed-block"><pre><code>class Solution: pass</code></pre></div>
            </div>
          </div>
        </body></html>
    "#;

    #[test]
    fn test_extracts_url_and_java_code() {
        let extraction = SolutionExtractor::new().extract(TWO_SUM_PAGE);
        assert_eq!(
            extraction,
            Extraction::complete(
                "https://platform.example/problems/two-sum/",
                "class Solution {}"
            )
        );
    }

    #[test]
    fn test_heading_without_link_yields_nothing() {
        let html = r#"<h1>1. Two Sum</h1>
            <div class="tabbed-set"><label>Java</label>
              <div class="tabbed-block"><code>class Solution {}</code></div></div>"#;
        assert_eq!(SolutionExtractor::new().extract(html), Extraction::missing());
    }

    #[test]
    fn test_missing_heading_yields_nothing() {
        let html = r#"<p><a href="https://platform.example/problems/x/">x</a></p>"#;
        assert_eq!(SolutionExtractor::new().extract(html), Extraction::missing());
    }

    #[test]
    fn test_paywall_marker_hides_code() {
        let html = TWO_SUM_PAGE.replace("1. Two Sum", "1. Two Sum (PREMIUM)");
        assert_eq!(
            SolutionExtractor::new().extract(&html),
            Extraction::url_only("https://platform.example/problems/two-sum/")
        );
    }

    #[test]
    fn test_short_group_is_skipped() {
        let html = r#"
            <h1><a href="https://platform.example/problems/x/">X</a></h1>
            <div class="tabbed-set">
              <label>C++</label><label>Java</label>
              <div class="tabbed-block"><code>int cpp;</code></div>
            </div>
            <div class="tabbed-set">
              <label>Java</label>
              <div class="tabbed-block"><code>class Second {}</code></div>
            </div>
        "#;
        assert_eq!(
            SolutionExtractor::new().extract(html),
            Extraction::complete("https://platform.example/problems/x/", "class Second {}")
        );
    }

    #[test]
    fn test_group_without_java_label_is_skipped() {
        let html = r#"
            <h1><a href="https://platform.example/problems/x/">X</a></h1>
            <div class="tabbed-set">
              <label>C++</label><label>Python</label>
              <div class="tabbed-block"><code>int cpp;</code></div>
              <div class="tabbed-block"><code>pass</code></div>
            </div>
        "#;
        assert_eq!(
            SolutionExtractor::new().extract(html),
            Extraction::url_only("https://platform.example/problems/x/")
        );
    }

    #[test]
    fn test_empty_code_block_falls_through() {
        let html = r#"
            <h1><a href="https://platform.example/problems/x/">X</a></h1>
            <div class="tabbed-set">
              <label>Java</label>
              <div class="tabbed-block"><code>   </code></div>
            </div>
            <div class="tabbed-set">
              <label>Java</label>
              <div class="tabbed-block"><code>class Later {}</code></div>
            </div>
        "#;
        assert_eq!(
            SolutionExtractor::new().extract(html).code.as_deref(),
            Some("class Later {}")
        );
    }
}
