//! User-facing strings in both display languages.
//!
//! Catalog content carries its own translations; this table only holds the
//! interface chrome.

use crate::model::Language;

/// Interface strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    Title,
    Subtitle,
    Categories,
    AllWidgets,
    FilterByCategory,
    SearchPlaceholder,
    SidebarSearchPlaceholder,
    ClearSearch,
    Grid,
    List,
    BackToWidgets,
    PropertiesSuffix,
    ClickForDetails,
    NoResults,
    NoResultsHint,
    WidgetDocumentation,
    Description,
    Properties,
    ExampleCode,
    UsageTips,
    CopyCode,
    Copied,
    /// Tooltip on the language button, naming the language it switches to.
    SwitchLanguage,
    ToggleTheme,
    ToggleSidebar,
    CatalogUnavailable,
}

/// Look up an interface string.
pub fn text(language: Language, message: Message) -> &'static str {
    use Message::*;

    match language {
        Language::En => match message {
            Title => "Flutter Basics",
            Subtitle => "Complete Guide to Flutter Widgets",
            Categories => "Categories",
            AllWidgets => "All Widgets",
            FilterByCategory => "Filter by Category",
            SearchPlaceholder => "Search Flutter widgets...",
            SidebarSearchPlaceholder => "Search widgets...",
            ClearSearch => "Clear search",
            Grid => "Grid",
            List => "List",
            BackToWidgets => "Back to Widgets",
            PropertiesSuffix => "properties",
            ClickForDetails => "Click for details",
            NoResults => "No widgets found matching your search",
            NoResultsHint => "Try adjusting your search terms or filters",
            WidgetDocumentation => "Flutter Widget Documentation",
            Description => "Description",
            Properties => "Properties",
            ExampleCode => "Example Code",
            UsageTips => "Usage Tips",
            CopyCode => "Copy Code",
            Copied => "Copied!",
            SwitchLanguage => "Switch to Arabic",
            ToggleTheme => "Toggle theme",
            ToggleSidebar => "Toggle sidebar",
            CatalogUnavailable => "The widget catalog could not be loaded",
        },
        Language::Ar => match message {
            Title => "أساسيات فلاتر",
            Subtitle => "دليل شامل لأدوات فلاتر",
            Categories => "الفئات",
            AllWidgets => "جميع الأدوات",
            FilterByCategory => "التصفية حسب الفئة",
            SearchPlaceholder => "ابحث عن أدوات فلاتر...",
            SidebarSearchPlaceholder => "بحث عن الأدوات...",
            ClearSearch => "مسح البحث",
            Grid => "شبكة",
            List => "قائمة",
            BackToWidgets => "العودة إلى الأدوات",
            PropertiesSuffix => "خصائص",
            ClickForDetails => "انقر للتفاصيل",
            NoResults => "لم يتم العثور على أدوات تطابق البحث",
            NoResultsHint => "حاول تعديل شروط البحث أو المرشحات",
            WidgetDocumentation => "توثيق أداة فلاتر",
            Description => "الوصف",
            Properties => "الخصائص",
            ExampleCode => "مثال الكود",
            UsageTips => "نصائح الاستخدام",
            CopyCode => "انسخ الكود",
            Copied => "تم النسخ!",
            SwitchLanguage => "Switch to English",
            ToggleTheme => "تبديل المظهر",
            ToggleSidebar => "إظهار القائمة الجانبية",
            CatalogUnavailable => "تعذر تحميل دليل الأدوات",
        },
    }
}

/// "Showing N of M widgets".
pub fn showing_count(language: Language, shown: usize, total: usize) -> String {
    match language {
        Language::En => format!("Showing {shown} of {total} widgets"),
        Language::Ar => format!("عرض {shown} من {total} أداة"),
    }
}

/// Badge text such as "3 properties".
pub fn property_count(language: Language, count: usize) -> String {
    format!("{count} {}", text(language, Message::PropertiesSuffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_languages() {
        assert_eq!(text(Language::En, Message::Title), "Flutter Basics");
        assert_eq!(text(Language::Ar, Message::Title), "أساسيات فلاتر");
    }

    #[test]
    fn test_switch_language_names_the_target() {
        assert_eq!(text(Language::En, Message::SwitchLanguage), "Switch to Arabic");
        assert_eq!(text(Language::Ar, Message::SwitchLanguage), "Switch to English");
    }

    #[test]
    fn test_showing_count() {
        assert_eq!(showing_count(Language::En, 3, 35), "Showing 3 of 35 widgets");
        assert_eq!(showing_count(Language::Ar, 3, 35), "عرض 3 من 35 أداة");
    }

    #[test]
    fn test_property_count() {
        assert_eq!(property_count(Language::En, 2), "2 properties");
        assert_eq!(property_count(Language::Ar, 2), "2 خصائص");
    }
}
