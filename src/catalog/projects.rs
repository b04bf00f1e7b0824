//! The static project list shown in the portfolio.

use super::types::{Highlight, Project};

/// All portfolio case studies, in display order.
pub static PROJECTS: &[Project] = &[
    Project {
        id: "sales-performance-dashboard",
        title: "Sales Performance Dashboard",
        description: "Comprehensive Excel dashboard analyzing sales performance across multiple regions with KPIs, trend analysis, and forecasting. Enabled real-time monitoring of revenue metrics and identified underperforming segments.",
        tools: &["Excel", "Pivot Tables", "Charts", "Conditional Formatting"],
        icon: "file-spreadsheet",
        color: "from-emerald-500 to-green-600",
        insights: &[
            "20% reduction in reporting time",
            "Identified 3 key growth opportunities",
            "Automated monthly KPI tracking",
        ],
        highlight: Highlight { icon: "trending-up", value: "25%", label: "Revenue Growth Tracked" },
    },
    Project {
        id: "customer-behavior-analysis",
        title: "Customer Behavior Analysis",
        description: "SQL-based analysis of customer purchase patterns using complex joins, CTEs, and aggregations. Uncovered key insights about customer lifetime value, churn prediction, and purchasing trends.",
        tools: &["SQL", "CTEs", "Joins", "Aggregations"],
        icon: "database",
        color: "from-blue-500 to-cyan-600",
        insights: &[
            "Segmented 10,000+ customers",
            "Identified high-value customer profiles",
            "Reduced churn by targeting at-risk users",
        ],
        highlight: Highlight { icon: "users", value: "10K+", label: "Customers Analyzed" },
    },
    Project {
        id: "business-intelligence-dashboard",
        title: "Business Intelligence Dashboard",
        description: "Interactive Power BI dashboard providing executive-level insights into operational efficiency, financial metrics, and departmental KPIs. Features drill-down capabilities and automated data refresh.",
        tools: &["Power BI", "DAX", "Data Modeling", "Visualization"],
        icon: "bar-chart-3",
        color: "from-amber-500 to-orange-600",
        insights: &[
            "Real-time data monitoring",
            "Executive decision support",
            "Cross-departmental visibility",
        ],
        highlight: Highlight { icon: "dollar-sign", value: "15%", label: "Efficiency Increase" },
    },
    Project {
        id: "ecommerce-analytics-report",
        title: "E-commerce Analytics Report",
        description: "Story-driven data visualization project analyzing e-commerce performance, customer journey, and conversion funnels. Created compelling visual narratives for stakeholder presentations.",
        tools: &["Data Visualization", "Excel", "Storytelling", "Charts"],
        icon: "line-chart",
        color: "from-purple-500 to-pink-600",
        insights: &[
            "Mapped complete customer journey",
            "Identified conversion bottlenecks",
            "Increased checkout rate insights",
        ],
        highlight: Highlight { icon: "shopping-cart", value: "30%", label: "Conversion Insights" },
    },
    Project {
        id: "operational-efficiency-analysis",
        title: "Operational Efficiency Analysis",
        description: "Analyzed operational data using SQL, identifying key performance metrics that guided executive planning and led to a 15% increase in efficiency. Delivered actionable insights for resource optimization.",
        tools: &["SQL", "Performance Metrics", "Data Analysis", "Reporting"],
        icon: "activity",
        color: "from-teal-500 to-emerald-600",
        insights: &[
            "15% efficiency increase achieved",
            "Identified bottleneck processes",
            "Optimized resource allocation",
        ],
        highlight: Highlight { icon: "trending-up", value: "15%", label: "Efficiency Increase" },
    },
    Project {
        id: "patient-data-validation",
        title: "Patient Data Validation Project",
        description: "Successfully led the team in a data validation for patient medical records after migration of patient information, thus leading to accurate data integrity. Ensured 99.8% data accuracy post-migration.",
        tools: &["Data Validation", "SQL", "Quality Assurance", "Healthcare Data"],
        icon: "clipboard-check",
        color: "from-rose-500 to-red-600",
        insights: &[
            "99.8% data accuracy achieved",
            "Validated 50,000+ patient records",
            "Zero critical data loss incidents",
        ],
        highlight: Highlight { icon: "heart-pulse", value: "99.8%", label: "Data Accuracy" },
    },
    Project {
        id: "patient-monitoring-dashboard",
        title: "Patient Data Monitoring Dashboard",
        description: "Built interactive dashboards in Excel that enabled real-time monitoring of patient data validation and reduced manual reporting hours by 20%. Streamlined quality assurance workflows.",
        tools: &["Excel", "Dashboards", "Real-time Monitoring", "Automation"],
        icon: "heart-pulse",
        color: "from-indigo-500 to-violet-600",
        insights: &[
            "20% reduction in manual hours",
            "Real-time validation tracking",
            "Automated quality reports",
        ],
        highlight: Highlight { icon: "activity", value: "20%", label: "Time Saved" },
    },
];

/// Looks up a project by identifier.
pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in PROJECTS.iter().enumerate() {
            for b in &PROJECTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_find_project() {
        let project = find_project("business-intelligence-dashboard").unwrap();
        assert_eq!(project.title, "Business Intelligence Dashboard");
        assert!(project.uses_power_bi());

        let project = find_project("sales-performance-dashboard").unwrap();
        assert!(!project.uses_power_bi());

        assert!(find_project("does-not-exist").is_none());
    }
}
