//! Problem catalog and daily selection
//!
//! The catalog is a fixed, ordered list of problems. The problem of the day
//! is a pure function of the calendar date: `year * 10000 + month * 100 + day`
//! taken modulo the catalog size.

use crate::database::{Difficulty, Problem};
use crate::database::Difficulty::{Easy, Hard, Medium};
use crate::error::{AppError, Result};
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;

struct Entry {
    id: u32,
    title: &'static str,
    title_zh: &'static str,
    slug: &'static str,
    difficulty: Difficulty,
    tags: &'static [&'static str],
}

const fn entry(
    id: u32,
    title: &'static str,
    title_zh: &'static str,
    slug: &'static str,
    difficulty: Difficulty,
    tags: &'static [&'static str],
) -> Entry {
    Entry {
        id,
        title,
        title_zh,
        slug,
        difficulty,
        tags,
    }
}

/// A subset of the LeetCode Hot 100
const HOT_100: &[Entry] = &[
    entry(1, "Two Sum", "两数之和", "two-sum", Easy, &["Array", "Hash Table"]),
    entry(
        2,
        "Add Two Numbers",
        "两数相加",
        "add-two-numbers",
        Medium,
        &["Linked List", "Math", "Recursion"],
    ),
    entry(
        3,
        "Longest Substring Without Repeating Characters",
        "无重复字符的最长子串",
        "longest-substring-without-repeating-characters",
        Medium,
        &["Hash Table", "String", "Sliding Window"],
    ),
    entry(
        4,
        "Median of Two Sorted Arrays",
        "寻找两个正序数组的中位数",
        "median-of-two-sorted-arrays",
        Hard,
        &["Array", "Binary Search", "Divide and Conquer"],
    ),
    entry(
        5,
        "Longest Palindromic Substring",
        "最长回文子串",
        "longest-palindromic-substring",
        Medium,
        &["String", "Dynamic Programming"],
    ),
    entry(
        11,
        "Container With Most Water",
        "盛最多水的容器",
        "container-with-most-water",
        Medium,
        &["Array", "Two Pointers", "Greedy"],
    ),
    entry(15, "3Sum", "三数之和", "3sum", Medium, &["Array", "Two Pointers", "Sorting"]),
    entry(20, "Valid Parentheses", "有效的括号", "valid-parentheses", Easy, &["Stack", "String"]),
    entry(
        21,
        "Merge Two Sorted Lists",
        "合并两个有序链表",
        "merge-two-sorted-lists",
        Easy,
        &["Linked List", "Recursion"],
    ),
    entry(
        42,
        "Trapping Rain Water",
        "接雨水",
        "trapping-rain-water",
        Hard,
        &["Array", "Two Pointers", "Dynamic Programming", "Stack"],
    ),
    entry(
        53,
        "Maximum Subarray",
        "最大子数组和",
        "maximum-subarray",
        Medium,
        &["Array", "Divide and Conquer", "Dynamic Programming"],
    ),
    entry(
        70,
        "Climbing Stairs",
        "爬楼梯",
        "climbing-stairs",
        Easy,
        &["Math", "Dynamic Programming", "Memoization"],
    ),
    entry(
        94,
        "Binary Tree Inorder Traversal",
        "二叉树的中序遍历",
        "binary-tree-inorder-traversal",
        Easy,
        &["Stack", "Tree", "Depth-First Search", "Binary Tree"],
    ),
    entry(
        101,
        "Symmetric Tree",
        "对称二叉树",
        "symmetric-tree",
        Easy,
        &["Tree", "Depth-First Search", "Breadth-First Search", "Binary Tree"],
    ),
    entry(
        121,
        "Best Time to Buy and Sell Stock",
        "买卖股票的最佳时机",
        "best-time-to-buy-and-sell-stock",
        Easy,
        &["Array", "Dynamic Programming"],
    ),
    entry(
        141,
        "Linked List Cycle",
        "环形链表",
        "linked-list-cycle",
        Easy,
        &["Hash Table", "Linked List", "Two Pointers"],
    ),
    entry(
        206,
        "Reverse Linked List",
        "反转链表",
        "reverse-linked-list",
        Easy,
        &["Linked List", "Recursion"],
    ),
    entry(
        234,
        "Palindrome Linked List",
        "回文链表",
        "palindrome-linked-list",
        Easy,
        &["Linked List", "Two Pointers", "Stack", "Recursion"],
    ),
    entry(
        300,
        "Longest Increasing Subsequence",
        "最长递增子序列",
        "longest-increasing-subsequence",
        Medium,
        &["Array", "Binary Search", "Dynamic Programming"],
    ),
];

impl Entry {
    fn to_problem(&self) -> Problem {
        Problem {
            id: self.id,
            display_id: self.id.to_string(),
            title: self.title.to_string(),
            title_zh: Some(self.title_zh.to_string()),
            slug: self.slug.to_string(),
            difficulty: self.difficulty,
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Integer seed for a calendar date
pub fn seed_for(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

/// Immutable, non-empty, ordered problem list
#[derive(Debug, Clone)]
pub struct Catalog {
    problems: Vec<Problem>,
}

impl Catalog {
    /// Build a catalog, rejecting empty lists and duplicate ids
    pub fn new(problems: Vec<Problem>) -> Result<Self> {
        if problems.is_empty() {
            return Err(AppError::InvalidCatalog(
                "catalog must contain at least one problem".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for problem in &problems {
            if !seen.insert(problem.id) {
                return Err(AppError::InvalidCatalog(format!(
                    "duplicate problem id {}",
                    problem.id
                )));
            }
        }

        Ok(Self { problems })
    }

    /// The built-in Hot 100 subset
    pub fn builtin() -> Self {
        Self {
            problems: HOT_100.iter().map(Entry::to_problem).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    /// Never true for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn get(&self, id: u32) -> Option<&Problem> {
        self.problems.iter().find(|p| p.id == id)
    }

    /// Catalog slot for a date, always in `[0, len)`
    pub fn index_for(&self, date: NaiveDate) -> usize {
        // rem_euclid keeps negative years in range
        seed_for(date).rem_euclid(self.problems.len() as i64) as usize
    }

    /// Problem of the day
    pub fn select(&self, date: NaiveDate) -> &Problem {
        &self.problems[self.index_for(date)]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn problem(id: u32) -> Problem {
        Problem {
            id,
            display_id: id.to_string(),
            title: format!("Problem {}", id),
            title_zh: None,
            slug: format!("problem-{}", id),
            difficulty: Difficulty::Medium,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        let rebuilt = Catalog::new(builtin.problems().to_vec()).unwrap();

        assert_eq!(rebuilt.len(), 19);
        assert!(!rebuilt.is_empty());
    }

    #[test]
    fn test_seed_formula() {
        assert_eq!(seed_for(date(2024, 3, 15)), 20_240_315);
        assert_eq!(seed_for(date(1999, 12, 31)), 19_991_231);
    }

    #[test]
    fn test_worked_example() {
        let catalog = Catalog::builtin();
        let day = date(2024, 3, 15);

        assert_eq!(catalog.index_for(day), 20_240_315 % 19);
        assert_eq!(catalog.index_for(day), 14);
        assert_eq!(catalog.select(day).slug, "best-time-to-buy-and-sell-stock");
    }

    #[test]
    fn test_same_date_same_problem() {
        let catalog = Catalog::builtin();
        let first = catalog.select(date(2025, 7, 4)).clone();
        let second = catalog.select(date(2025, 7, 4)).clone();

        assert_eq!(first, second);
    }

    #[test]
    fn test_index_in_range_across_dates() {
        let catalog = Catalog::new((1..=7).map(problem).collect()).unwrap();

        let mut day = date(2023, 1, 1);
        for _ in 0..800 {
            assert!(catalog.index_for(day) < catalog.len());
            day = day.succ_opt().unwrap();
        }

        assert!(catalog.index_for(NaiveDate::MIN) < catalog.len());
        assert!(catalog.index_for(NaiveDate::MAX) < catalog.len());
        assert!(catalog.index_for(date(-44, 3, 15)) < catalog.len());
    }

    #[test]
    fn test_single_entry_catalog() {
        let catalog = Catalog::new(vec![problem(9)]).unwrap();
        assert_eq!(catalog.select(date(2030, 2, 28)).id, 9);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = Catalog::new(Vec::new()).unwrap_err();
        assert!(matches!(err, AppError::InvalidCatalog(_)));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Catalog::new(vec![problem(1), problem(2), problem(1)]).unwrap_err();
        assert!(err.to_string().contains("duplicate problem id 1"));
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get(42).unwrap().title, "Trapping Rain Water");
        assert_eq!(catalog.get(42).unwrap().title_zh.as_deref(), Some("接雨水"));
        assert!(catalog.get(9999).is_none());
    }
}
