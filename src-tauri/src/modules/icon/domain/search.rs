// Icon Search Plan
//
// 图标搜索计划：按优先级遍历 (模式 × 目录 × 应用名)
//
// 图标主题没有统一索引，这里只按命名和尺寸约定做穷举探测

use std::path::{Path, PathBuf};

use super::value_objects::{IconFormat, IconPattern};

/// 常见的应用图标名
pub const ICON_NAMES: [&str; 9] = [
    "whatsapp",
    "whatsappfordesktop",
    "whatsapp-desktop",
    "whatsapp-nativefier",
    "whatsapp-web",
    "whatsapp-for-linux",
    "whatsapp-msg",
    "whatsapp-tray",
    "whatsapp-logo",
];

/// 系统级图标根目录
pub const SYSTEM_ICON_ROOTS: [&str; 3] = [
    "/usr/share/icons",
    "/usr/share/pixmaps",
    "/usr/local/share/icons",
];

/// 按优先级排列的搜索模式（PNG 优先，最后是 SVG）
pub fn default_patterns() -> Vec<IconPattern> {
    vec![
        IconPattern::new(IconFormat::Png, "32x32", "apps"),
        IconPattern::new(IconFormat::Png, "32x32", "tray"),
        IconPattern::new(IconFormat::Png, "48x48", "apps"),
        IconPattern::new(IconFormat::Png, "24x24", "panel"),
        IconPattern::new(IconFormat::Svg, "scalable", "apps"),
    ]
}

/// 图标搜索计划
#[derive(Debug, Clone)]
pub struct IconSearchPlan {
    pub roots: Vec<PathBuf>,
    pub names: Vec<String>,
    pub patterns: Vec<IconPattern>,
}

impl IconSearchPlan {
    /// 用户目录（`~/.icons`, `~/.local/share/icons`）在前，系统目录在后
    pub fn new(home_dir: Option<&Path>) -> Self {
        let mut roots = Vec::new();
        if let Some(home) = home_dir {
            roots.push(home.join(".icons"));
            roots.push(home.join(".local/share/icons"));
        }
        roots.extend(SYSTEM_ICON_ROOTS.iter().map(PathBuf::from));

        Self {
            roots,
            names: ICON_NAMES.iter().map(|name| name.to_string()).collect(),
            patterns: default_patterns(),
        }
    }

    pub fn with_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.roots = roots;
        self
    }

    /// 展开候选目录：存在的根目录 + 其一级子目录，去重并保持发现顺序
    pub fn candidate_dirs<F, G>(&self, is_dir: F, list_subdirs: G) -> Vec<PathBuf>
    where
        F: Fn(&Path) -> bool,
        G: Fn(&Path) -> Vec<PathBuf>,
    {
        let mut dirs: Vec<PathBuf> = Vec::new();
        let existing_roots: Vec<&PathBuf> = self.roots.iter().filter(|root| is_dir(root)).collect();

        for root in &existing_roots {
            push_unique(&mut dirs, root.to_path_buf());
        }
        for root in &existing_roots {
            for sub in list_subdirs(root) {
                push_unique(&mut dirs, sub);
            }
        }

        dirs
    }

    /// 按优先级生成全部候选文件路径
    pub fn candidates<'a>(&'a self, dirs: &'a [PathBuf]) -> impl Iterator<Item = PathBuf> + 'a {
        self.patterns.iter().flat_map(move |pattern| {
            dirs.iter().flat_map(move |dir| {
                self.names.iter().map(move |name| {
                    dir.join(&pattern.size_dir)
                        .join(&pattern.subfolder)
                        .join(pattern.file_name(name))
                })
            })
        })
    }
}

fn push_unique(dirs: &mut Vec<PathBuf>, dir: PathBuf) {
    if !dirs.contains(&dir) {
        dirs.push(dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_includes_user_roots_first() {
        let plan = IconSearchPlan::new(Some(Path::new("/home/alice")));
        assert_eq!(plan.roots[0], PathBuf::from("/home/alice/.icons"));
        assert_eq!(plan.roots[1], PathBuf::from("/home/alice/.local/share/icons"));
        assert_eq!(plan.roots.len(), 5);
    }

    #[test]
    fn test_candidate_dirs_drop_missing_roots_and_dedupe() {
        let plan = IconSearchPlan::new(None).with_roots(vec![
            PathBuf::from("/a"),
            PathBuf::from("/missing"),
            PathBuf::from("/b"),
        ]);

        let dirs = plan.candidate_dirs(
            |path| path != Path::new("/missing"),
            |root| {
                if root == Path::new("/a") {
                    vec![PathBuf::from("/a/hicolor"), PathBuf::from("/b")]
                } else {
                    vec![PathBuf::from("/b/Adwaita")]
                }
            },
        );

        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a"),
                PathBuf::from("/b"),
                PathBuf::from("/a/hicolor"),
                PathBuf::from("/b/Adwaita"),
            ]
        );
    }

    #[test]
    fn test_candidates_follow_pattern_then_dir_then_name_order() {
        let plan = IconSearchPlan::new(None);
        let dirs = vec![PathBuf::from("/x"), PathBuf::from("/y")];
        let candidates: Vec<PathBuf> = plan.candidates(&dirs).collect();

        assert_eq!(candidates.len(), 5 * 2 * ICON_NAMES.len());
        assert_eq!(candidates[0], PathBuf::from("/x/32x32/apps/whatsapp.png"));
        assert_eq!(
            candidates[1],
            PathBuf::from("/x/32x32/apps/whatsappfordesktop.png")
        );
        assert_eq!(
            candidates[ICON_NAMES.len()],
            PathBuf::from("/y/32x32/apps/whatsapp.png")
        );
        assert_eq!(
            candidates.last().unwrap(),
            &PathBuf::from("/y/scalable/apps/whatsapp-logo.svg")
        );
    }
}
