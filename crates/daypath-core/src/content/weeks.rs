//! Static curriculum plan: twelve weeks of seven days.
//!
//! Strings may reference scenario keys as `{key}` or `{key|fallback}`; see
//! [`Scenario::fill`].

use super::template::Scenario;
use super::{Difficulty, QuestionKind};

use Difficulty::{Easy, Hard, Medium};
use QuestionKind::{Fix, Mcq};

pub(crate) struct QuestionTemplate {
    pub kind: QuestionKind,
    pub prompt: &'static str,
    pub choices: [&'static str; 4],
    pub correct: usize,
    pub feedback: &'static str,
}

pub(crate) struct SkillTemplate {
    pub title: &'static str,
    pub prompt: &'static str,
    pub kind: QuestionKind,
    pub choices: [&'static str; 4],
    pub explanation: &'static str,
}

pub(crate) struct BankTemplate {
    pub kind: QuestionKind,
    pub prompt: &'static str,
    pub choices: [&'static str; 4],
    pub correct: usize,
    pub explanation: &'static str,
    pub difficulty: Difficulty,
}

/// Hand-written opening for one day: an intuition and two learn steps.
pub(crate) struct Scaffold {
    pub intuition: &'static str,
    pub learn: [(&'static str, &'static str); 2],
}

pub(crate) struct WeekPlan {
    pub titles: [&'static str; 7],
    pub micro_goals: [&'static str; 7],
    /// Plainer wording shown to learners in the first weeks.
    pub plain_micro_goals: Option<[&'static str; 7]>,
    pub scenarios: [Scenario; 7],
    pub scaffolds: Option<[Scaffold; 7]>,
    pub intuition: &'static str,
    pub questions: [QuestionTemplate; 4],
    /// Topic label for the closing manager question.
    pub focus: &'static str,
    pub skill_checks: [SkillTemplate; 2],
    pub checkpoint_bank: [BankTemplate; 6],
    pub recap: [&'static str; 3],
    pub manager_line: &'static str,
}

const fn q(
    kind: QuestionKind,
    prompt: &'static str,
    choices: [&'static str; 4],
    correct: usize,
    feedback: &'static str,
) -> QuestionTemplate {
    QuestionTemplate {
        kind,
        prompt,
        choices,
        correct,
        feedback,
    }
}

const fn skill(
    title: &'static str,
    prompt: &'static str,
    kind: QuestionKind,
    choices: [&'static str; 4],
    explanation: &'static str,
) -> SkillTemplate {
    SkillTemplate {
        title,
        prompt,
        kind,
        choices,
        explanation,
    }
}

const fn cp(
    kind: QuestionKind,
    prompt: &'static str,
    choices: [&'static str; 4],
    correct: usize,
    explanation: &'static str,
    difficulty: Difficulty,
) -> BankTemplate {
    BankTemplate {
        kind,
        prompt,
        choices,
        correct,
        explanation,
        difficulty,
    }
}

const fn scaffold(intuition: &'static str, learn: [(&'static str, &'static str); 2]) -> Scaffold {
    Scaffold { intuition, learn }
}

pub(crate) const WEEKS: [WeekPlan; 12] = [
    // -----------------------------------------------------------------------
    // Week 1: data thinking
    // -----------------------------------------------------------------------
    WeekPlan {
        titles: [
            "Good questions vs bad questions",
            "Metrics that drive action",
            "Correlation vs causation",
            "Read charts without lying",
            "Define a clear decision",
            "Choose a baseline",
            "Summarize for a manager",
        ],
        micro_goals: [
            "Write a question that leads to a clear next step.",
            "Choose a metric that changes behavior, not just attention.",
            "Avoid claiming cause when you only see a pattern.",
            "Spot misleading chart choices and fix them.",
            "Tie analysis to one business decision.",
            "Compare results to a fair baseline.",
            "Summarize insights in one clear message.",
        ],
        plain_micro_goals: Some([
            "Turn a vague question into one clear next step.",
            "Pick a number that guides action, not just attention.",
            "Tell the difference between a pattern and a cause.",
            "Spot chart choices that exaggerate a change.",
            "Connect a question to a single decision.",
            "Compare results to a fair starting point.",
            "Sum up the story in one short update.",
        ]),
        scenarios: [
            Scenario(&[("product", "subscription app"), ("metric", "trial activation rate"), ("vanity_metric", "app installs"), ("segment", "new users")]),
            Scenario(&[("product", "online store"), ("metric", "checkout conversion"), ("vanity_metric", "website visits"), ("segment", "mobile shoppers")]),
            Scenario(&[("product", "delivery service"), ("metric", "on-time rate"), ("vanity_metric", "order volume"), ("segment", "evening orders")]),
            Scenario(&[("product", "learning platform"), ("metric", "lesson completion rate"), ("vanity_metric", "sign-ups"), ("segment", "free users")]),
            Scenario(&[("product", "support team"), ("metric", "first response time"), ("vanity_metric", "tickets created"), ("segment", "enterprise accounts")]),
            Scenario(&[("product", "marketing campaign"), ("metric", "lead-to-demo rate"), ("vanity_metric", "ad impressions"), ("segment", "paid search")]),
            Scenario(&[("product", "B2B SaaS"), ("metric", "weekly active accounts"), ("vanity_metric", "email opens"), ("segment", "new trials")]),
        ],
        scaffolds: Some([
            scaffold(
                "You are planning a road trip. \"Will we have fun?\" is too big. \"Which stop makes the trip too long?\" tells you what to change. A clear question points to one fix.",
                [
                    ("Focus on one step", "For a {product}, pick a single moment to inspect, like sign-up or first use. That keeps the work small and specific."),
                    ("Make the decision obvious", "Ask a question that ends with a choice: keep the current flow, change one step, or test a new one."),
                ],
            ),
            scaffold(
                "A cafe looks busy from the street, but the owner cares about paid orders. The right number tells you if the cafe is healthy.",
                [
                    ("What a metric means", "A metric is a number that shows health. For a {product}, {metric} shows if visitors move forward."),
                    ("Vanity vs action", "Big counts like {vanity_metric} can rise while {metric} stays flat. Choose the number that would change what the team does tomorrow."),
                ],
            ),
            scaffold(
                "Umbrellas and rain show up together. The umbrellas did not cause the rain. They just arrive at the same time.",
                [
                    ("Pattern vs cause", "When two things move together, you have a pattern. That pattern is called correlation."),
                    ("Prove the cause", "If {metric} changed after a new idea, say it might be related unless you can point to a test you controlled."),
                ],
            ),
            scaffold(
                "Zoom in on a small scratch and it looks huge. The view you choose changes the story.",
                [
                    ("Scale matters", "Charts can exaggerate changes in {metric} by cropping the scale or skipping labels."),
                    ("Tell the honest story", "Use clear labels and a fair range so a small change looks small and a big change looks big."),
                ],
            ),
            scaffold(
                "At dinner, \"what should we eat?\" is vague. \"Do we want pasta or salad?\" leads to a choice.",
                [
                    ("Start with the decision", "For a {product}, decide what you might change first, like a message, a flow step, or a feature."),
                    ("Write the question", "Phrase the question so it directly informs that decision. If you cannot name the decision, rewrite the question."),
                ],
            ),
            scaffold(
                "Before you paint a wall, you look at the old color. That starting point helps you judge the change.",
                [
                    ("Define a baseline", "A baseline is the starting point you compare against, like {metric} last week."),
                    ("Make it fair", "Compare similar periods, like weekdays to weekdays, so your comparison is honest."),
                ],
            ),
            scaffold(
                "You text a friend: what happened, why it matters, what next. Short and clear.",
                [
                    ("One-sentence update", "Start with the outcome in plain words. Example: \"{metric} changed for {segment}.\""),
                    ("Add the action", "End with what you recommend the team do next. Keep it one step."),
                ],
            ),
        ]),
        intuition: "You are trying to pick the best route home. You compare a few options and choose the one that saves time.",
        questions: [
            q(Mcq, "Which question is most actionable for the {product}?",
                ["Do users like the product?", "Which step causes the biggest drop in {metric}?", "How many {vanity_metric} did we get?", "Is the market competitive?"],
                1, "Correct. It points to a specific action."),
            q(Fix, "Fix the mistake: \"We are winning because {vanity_metric} went up.\"",
                ["Check whether {metric} improved too.", "Report installs only and skip other metrics.", "Ignore the drop in retention.", "Change the chart colors."],
                0, "Correct. Tie the story to a meaningful metric."),
            q(Mcq, "After a new banner, {metric} rose. What is the safest statement?",
                ["The banner caused the lift.", "The lift happened, but we need more evidence before claiming cause.", "Metrics only move for one reason.", "The change is too small to matter."],
                1, "Correct. Correlation is not proof of cause."),
            q(Fix, "Fix the mistake: A chart starts at 90 and makes a small change look huge.",
                ["Use a full axis or call out the scale clearly.", "Remove the axis labels.", "Only show the last day.", "Replace the chart with a table of raw data."],
                0, "Correct. Keep the scale honest."),
        ],
        focus: "data thinking",
        skill_checks: [
            skill("Pick the sharper question", "You run a {product}. Which question is easiest to act on?", Mcq,
                ["Which step causes the biggest drop in {metric}?", "Do users like the product?", "How many {vanity_metric} did we get?", "Is the market competitive?"],
                "Actionable questions point to a specific step."),
            skill("Highlight the right number", "In a weekly update, which number should lead?", Mcq,
                ["{metric|Activation rate}", "{vanity_metric|App installs}", "Total followers", "Press mentions"],
                "Lead with the number tied to outcomes."),
        ],
        checkpoint_bank: [
            cp(Mcq, "Which question helps improve {product}?",
                ["Which step slows {metric}?", "Is the product popular?", "How many {vanity_metric} happened?", "What does the CEO think?"],
                0, "Pick a question that points to one step you can change.", Easy),
            cp(Fix, "Fix the update: \"Installs went up, so we are winning.\"",
                ["Check if {metric} moved too before claiming success.", "Only share installs.", "Hide the report.", "Change the colors."],
                0, "Confirm the outcome number, not only attention metrics.", Easy),
            cp(Mcq, "You saw {metric} rise after a change. What is safest?",
                ["The change caused the lift.", "The lift happened, but we need more proof before claiming cause.", "The lift is fake.", "We should stop tracking it."],
                1, "Correlation alone is not proof of cause.", Medium),
            cp(Mcq, "Which baseline is most fair?",
                ["Last week or last month.", "Only the best day.", "A random day.", "No baseline."],
                0, "Compare to a normal period.", Medium),
            cp(Fix, "Fix the chart: the axis starts at 90 for a small change.",
                ["Start at zero or call out the tight scale clearly.", "Remove the axis.", "Hide the labels.", "Use 3D bars."],
                0, "Avoid exaggerating movement.", Medium),
            cp(Mcq, "A good manager update includes:",
                ["The change, the driver, and one next step.", "Only raw rows.", "Every chart you made.", "No action at all."],
                0, "Keep it action ready.", Hard),
        ],
        recap: [
            "Start with one clear question.",
            "Tie the question to a decision.",
            "Share one next step.",
        ],
        manager_line: "What you'd tell your manager: {metric} moved for {segment|one group}, so we should check the step where users drop.",
    },
    // -----------------------------------------------------------------------
    // Week 2: Excel cleanup
    // -----------------------------------------------------------------------
    WeekPlan {
        titles: [
            "Clean messy rows",
            "Fix text issues",
            "Fix dates",
            "IF basics",
            "COUNTIF and SUMIF",
            "Remove duplicates safely",
            "Cleanup checklist",
        ],
        micro_goals: [
            "Find and remove obvious data issues before analysis.",
            "Standardize text so categories match.",
            "Convert text dates into usable dates.",
            "Use IF to label rows for analysis.",
            "Use COUNTIF/SUMIF to summarize quickly.",
            "Remove duplicates without losing valid rows.",
            "Build a repeatable cleanup flow.",
        ],
        plain_micro_goals: Some([
            "Clean a spreadsheet list so it is ready to use.",
            "Make names and labels match exactly.",
            "Standardize dates so they sort correctly.",
            "Use IF to label rows with a simple rule.",
            "Use COUNTIF and SUMIF to total with a rule.",
            "Remove duplicates without losing real records.",
            "Use a simple cleanup checklist before sharing.",
        ]),
        scenarios: [
            Scenario(&[("file", "orders.csv"), ("column", "Customer Name"), ("date_column", "Order Date"), ("metric", "Revenue")]),
            Scenario(&[("file", "leads.xlsx"), ("column", "Company"), ("date_column", "Lead Date"), ("metric", "Qualified Leads")]),
            Scenario(&[("file", "tickets.xlsx"), ("column", "Category"), ("date_column", "Created Date"), ("metric", "Resolved Tickets")]),
            Scenario(&[("file", "subscriptions.csv"), ("column", "Plan"), ("date_column", "Start Date"), ("metric", "Active Plans")]),
            Scenario(&[("file", "returns.csv"), ("column", "Reason"), ("date_column", "Return Date"), ("metric", "Return Rate")]),
            Scenario(&[("file", "campaigns.csv"), ("column", "Channel"), ("date_column", "Send Date"), ("metric", "Clicks")]),
            Scenario(&[("file", "inventory.csv"), ("column", "SKU"), ("date_column", "Restock Date"), ("metric", "Units")]),
        ],
        scaffolds: Some([
            scaffold(
                "Your shopping list has crossed-out items, duplicates, and messy notes. You clean it before going to the store.",
                [
                    ("What data is", "Data is just the rows in a spreadsheet. In {file}, each row is one record."),
                    ("Cleaning basics", "Start by checking {column} for blanks or typos so your totals are reliable."),
                ],
            ),
            scaffold(
                "The same person is saved as \"Sam\", \"SAM\", and \"Sammy\". It looks like three people.",
                [
                    ("Make text match", "Standardize {column} so labels match exactly. That keeps counts accurate."),
                    ("Use simple fixes", "Trim spaces, fix casing, and replace common variants before you summarize."),
                ],
            ),
            scaffold(
                "Three friends write the same date in three different ways. You cannot sort them.",
                [
                    ("Pick one format", "Choose one date format for {date_column}, like YYYY-MM-DD."),
                    ("Convert text to dates", "In Excel, convert text dates so they sort and filter correctly."),
                ],
            ),
            scaffold(
                "A bouncer checks IDs: if age is 21+, allow entry. If not, deny.",
                [
                    ("IF is a rule", "IF lets you label rows using a simple rule: if the condition is true, use one label, otherwise use another."),
                    ("Concrete example", "Example: if {metric} is over target, label it \"ok\"; otherwise \"needs work\"."),
                ],
            ),
            scaffold(
                "You count red socks, then add up only the red socks' prices.",
                [
                    ("COUNTIF counts with a rule", "COUNTIF counts rows that match a condition, like {metric} = \"high\"."),
                    ("SUMIF totals with a rule", "SUMIF adds values for rows that match the condition, like summing {metric} for one category."),
                ],
            ),
            scaffold(
                "A receipt is scanned twice, doubling the total. You need to keep just one.",
                [
                    ("Why duplicates hurt", "Duplicates make totals like {metric} too high, so decisions are wrong."),
                    ("Remove safely", "Check the key column in {file} (like an ID) so you remove true duplicates only."),
                ],
            ),
            scaffold(
                "A pilot runs a checklist before takeoff. It prevents easy mistakes.",
                [
                    ("Quick checklist", "Scan {file} for blanks, weird dates, and mismatched labels before you continue."),
                    ("Save a clean copy", "Keep a cleaned version so you can always go back."),
                ],
            ),
        ]),
        intuition: "You sort a messy drawer into neat groups before you decide what to keep.",
        questions: [
            q(Mcq, "You open {file}. What should you do first?",
                ["Build a chart immediately.", "Check for missing rows, duplicates, and column types.", "Hide columns you do not like.", "Send the file to your manager."],
                1, "Correct. Clean structure first."),
            q(Fix, "Fix the mistake: {column} has extra spaces, and counts look wrong.",
                ["Use TRIM on {column}, then count.", "Sort the column A to Z only.", "Change the font size.", "Hide the rows with spaces."],
                0, "Correct. Trim spaces before counting."),
            q(Mcq, "Which Excel function fits: \"Sum {metric} where Status = 'Paid'\"?",
                ["SUMIF", "COUNTIF", "IFERROR", "VLOOKUP"],
                0, "Correct. SUMIF matches a condition."),
            q(Fix, "{date_column} is stored as text and sorting is wrong. What is the fix?",
                ["Convert text to real dates (Text to Columns or DATEVALUE).", "Sort A to Z again.", "Change the cell color.", "Move the column to the end."],
                0, "Correct. Convert to a real date."),
        ],
        focus: "Excel cleanup",
        skill_checks: [
            skill("First cleanup move", "In {file}, {column} has extra spaces. What is the first fix?", Fix,
                ["Trim spaces and standardize casing.", "Sort the column by length.", "Delete the entire column.", "Hide the column."],
                "Standardize labels before counting."),
            skill("Pick the right formula", "Which formula counts rows where {metric} is \"High\"?", Mcq,
                ["COUNTIF", "SUMIF", "AVERAGE", "IF"],
                "COUNTIF counts rows that match a condition."),
        ],
        checkpoint_bank: [
            cp(Mcq, "In {file}, what should you check first?",
                ["Blanks, duplicates, and inconsistent labels.", "Chart colors.", "Font sizes.", "Column width."],
                0, "Clean structure comes first.", Easy),
            cp(Fix, "{column} has extra spaces and mixed case. Fix it by:",
                ["Trim spaces and standardize case.", "Sorting only.", "Deleting the column.", "Hiding the rows."],
                0, "Normalize text so counts match.", Easy),
            cp(Mcq, "Which function sums {metric} only when Status = \"Paid\"?",
                ["SUMIF", "COUNTIF", "IF", "AVERAGE"],
                0, "SUMIF adds values that meet a rule.", Medium),
            cp(Fix, "{date_column} is text and sorts wrong. Fix by:",
                ["Convert it to a real date type.", "Add a chart.", "Bold the column.", "Copy and paste values only."],
                0, "Date type controls sorting.", Medium),
            cp(Mcq, "Why remove duplicates carefully?",
                ["So you do not delete real, unique records.", "So the file looks shorter.", "So charts auto-update.", "So filters stop working."],
                0, "Protect real rows while removing exact duplicates.", Medium),
            cp(Mcq, "A safe cleanup flow ends with:",
                ["Saving a clean copy.", "Deleting the original file.", "Only sorting.", "Renaming columns randomly."],
                0, "Keep a clean version you can reuse.", Hard),
        ],
        recap: [
            "Clean labels before counting.",
            "Standardize dates and text.",
            "Keep a clean copy to reuse.",
        ],
        manager_line: "What you'd tell your manager: The sheet is clean, so {metric} counts are now reliable.",
    },
    // -----------------------------------------------------------------------
    // Week 3: Excel analysis
    // -----------------------------------------------------------------------
    WeekPlan {
        titles: [
            "Pivot tables: first build",
            "Sort and filter",
            "Pivot chart",
            "Slicers and filters",
            "Simple KPI dashboard",
            "Highlight key changes",
            "Tell the story",
        ],
        micro_goals: [
            "Create a pivot table that answers a basic question.",
            "Use sorting and filters to surface top drivers.",
            "Turn a pivot into a readable chart.",
            "Add slicers to make the analysis interactive.",
            "Lay out a simple KPI dashboard.",
            "Spot a change worth calling out.",
            "Explain the insight in plain business terms.",
        ],
        plain_micro_goals: None,
        scenarios: [
            Scenario(&[("dataset", "sales data"), ("dimension", "region"), ("metric", "revenue")]),
            Scenario(&[("dataset", "support tickets"), ("dimension", "issue type"), ("metric", "ticket count")]),
            Scenario(&[("dataset", "subscriptions"), ("dimension", "plan"), ("metric", "active accounts")]),
            Scenario(&[("dataset", "marketing data"), ("dimension", "channel"), ("metric", "leads")]),
            Scenario(&[("dataset", "product usage"), ("dimension", "feature"), ("metric", "weekly users")]),
            Scenario(&[("dataset", "shipping data"), ("dimension", "carrier"), ("metric", "on-time deliveries")]),
            Scenario(&[("dataset", "retail data"), ("dimension", "store"), ("metric", "units sold")]),
        ],
        scaffolds: None,
        intuition: "You separate receipts by store to see where most money goes.",
        questions: [
            q(Mcq, "You need {metric} by {dimension}. What should you use?",
                ["Pivot table", "Merge cells", "Spell check", "Freeze panes"],
                0, "Correct. Pivot tables summarize fast."),
            q(Fix, "Fix the mistake: Your pivot shows Count but you need Sum.",
                ["Change the value field summary to Sum.", "Sort the pivot A to Z.", "Add a slicer only.", "Convert the sheet to PDF."],
                0, "Correct. Adjust the value field settings."),
            q(Mcq, "Which step quickly finds the top {dimension} for {metric}?",
                ["Sort descending by the metric.", "Hide every other row.", "Use a random filter.", "Alphabetize by name."],
                0, "Correct. Sort by the metric."),
            q(Fix, "Fix the mistake: A chart has 40 categories and is unreadable.",
                ["Filter to top categories and group the rest as Other.", "Make the chart wider.", "Use brighter colors only.", "Remove labels entirely."],
                0, "Correct. Reduce clutter with a top list."),
        ],
        focus: "Excel analysis",
        skill_checks: [
            skill("Best Excel tool", "You need {metric} by {dimension}. What is the fastest Excel tool?", Mcq,
                ["Pivot table", "Manual sorting", "Freeze panes", "Text to columns"],
                "Pivot tables summarize quickly."),
            skill("Find the top driver", "To surface the biggest {dimension}, what should you do?", Fix,
                ["Sort the summary column descending.", "Hide the smallest values.", "Delete half the rows.", "Change the chart color."],
                "Sorting shows the top drivers."),
        ],
        checkpoint_bank: [
            cp(Mcq, "To summarize {metric} by {dimension}, use:",
                ["Pivot table", "Merge cells", "Freeze panes", "Spell check"],
                0, "Pivots group and summarize fast.", Easy),
            cp(Fix, "Your pivot shows Count, but you need Sum. Fix by:",
                ["Change the value field to Sum.", "Sort descending.", "Hide blanks.", "Add a filter only."],
                0, "Adjust the value field summary.", Easy),
            cp(Mcq, "Sorting helps you:",
                ["Find top drivers quickly.", "Create duplicates.", "Remove labels.", "Hide trends."],
                0, "Sort to surface the biggest contributors.", Medium),
            cp(Mcq, "A pivot chart should:",
                ["Focus on one message.", "Show every tab at once.", "Use random colors.", "Hide labels."],
                0, "Keep the message clear.", Medium),
            cp(Fix, "Fix the mistake: You filtered out needed categories.",
                ["Reset filters and verify all groups are included.", "Delete the pivot.", "Switch to a different sheet.", "Remove totals."],
                0, "Check filters before sharing.", Medium),
            cp(Mcq, "A simple dashboard should include:",
                ["A few KPIs and a clear trend.", "Every chart possible.", "Only raw rows.", "No titles."],
                0, "Keep it tight and readable.", Hard),
        ],
        recap: [
            "Summarize with a pivot.",
            "Sort to see the top drivers.",
            "Keep visuals simple and clear.",
        ],
        manager_line: "What you'd tell your manager: The pivot shows {metric} is highest for {dimension|one group}.",
    },
    // -----------------------------------------------------------------------
    // Week 4: Excel project
    // -----------------------------------------------------------------------
    WeekPlan {
        titles: [
            "Project kickoff",
            "Clean the data",
            "Build core metrics",
            "Summarize with pivot",
            "Find a trend",
            "Draft the dashboard",
            "Present the insight",
        ],
        micro_goals: [
            "Define the project question and success metric.",
            "Remove errors that block analysis.",
            "Create the core calculated fields.",
            "Summarize results with a pivot table.",
            "Spot a trend worth sharing.",
            "Lay out a clean Excel dashboard.",
            "Deliver a clear business recommendation.",
        ],
        plain_micro_goals: None,
        scenarios: [
            Scenario(&[("project", "retail weekly sales"), ("metric", "weekly revenue"), ("dimension", "store")]),
            Scenario(&[("project", "subscription churn"), ("metric", "churn rate"), ("dimension", "plan")]),
            Scenario(&[("project", "marketing leads"), ("metric", "lead conversion"), ("dimension", "channel")]),
            Scenario(&[("project", "support workload"), ("metric", "tickets per agent"), ("dimension", "team")]),
            Scenario(&[("project", "delivery performance"), ("metric", "on-time rate"), ("dimension", "carrier")]),
            Scenario(&[("project", "product usage"), ("metric", "feature adoption"), ("dimension", "feature")]),
            Scenario(&[("project", "inventory health"), ("metric", "stockouts"), ("dimension", "category")]),
        ],
        scaffolds: None,
        intuition: "You plan a party by listing the steps in order before doing any work.",
        questions: [
            q(Mcq, "Project: {project}. What is the best first step?",
                ["Define the business question and success metric.", "Pick colors for the dashboard.", "Write a long report.", "Share raw data immediately."],
                0, "Correct. Start with the question and metric."),
            q(Fix, "Fix the mistake: You calculate a metric before removing duplicate rows.",
                ["Remove duplicates, then recalculate.", "Ignore duplicates for speed.", "Sort the data only.", "Change the metric definition."],
                0, "Correct. Clean before calculating."),
            q(Mcq, "Which pivot layout best summarizes {metric} by {dimension}?",
                ["{dimension} in rows, {metric} as values.", "{metric} in rows, {dimension} as values.", "Keep all fields in one column.", "Do not use a pivot."],
                0, "Correct. Dimension in rows, metric in values."),
            q(Fix, "Fix the mistake: The chart shows totals but hides the trend.",
                ["Use a line chart over time for the trend.", "Switch to a 3D pie chart.", "Remove the time field.", "Sort alphabetically."],
                0, "Correct. Show the trend over time."),
        ],
        focus: "Excel project",
        skill_checks: [
            skill("Project kickoff step", "For {project}, what comes first?", Mcq,
                ["Define the goal and success metric.", "Pick chart colors.", "Share a draft slide.", "Hide missing values."],
                "Start with the goal before building."),
            skill("Share the insight", "Which update is best to share?", Mcq,
                ["One clear change and the next action.", "Every row in the sheet.", "A list of formulas only.", "No recommendation."],
                "Keep it short and actionable."),
        ],
        checkpoint_bank: [
            cp(Mcq, "The first step in the {project} project is:",
                ["Define the decision and success number.", "Build charts first.", "Hide the data.", "Skip cleaning."],
                0, "Start with the goal.", Easy),
            cp(Fix, "Fix the mistake: You calculated metrics before cleaning.",
                ["Clean obvious errors first, then calculate.", "Add more formulas.", "Ignore the errors.", "Share the report now."],
                0, "Clean data before calculations.", Easy),
            cp(Mcq, "Which summary best supports {metric}?",
                ["A pivot with totals by segment.", "Raw rows only.", "Hidden columns.", "A blank sheet."],
                0, "Summaries show the key totals.", Medium),
            cp(Mcq, "A trend is useful when it:",
                ["Shows change over time.", "Hides changes.", "Removes labels.", "Ignores dates."],
                0, "Trends show direction.", Medium),
            cp(Fix, "Fix the draft dashboard: It has no labels.",
                ["Add clear titles and axis labels.", "Add more colors only.", "Remove all charts.", "Use tiny fonts."],
                0, "Labels make charts readable.", Medium),
            cp(Mcq, "A good final slide includes:",
                ["The key insight and recommended action.", "Every calculation.", "Only screenshots.", "No conclusion."],
                0, "End with action.", Hard),
        ],
        recap: [
            "Define the goal first.",
            "Build the core calculation.",
            "Share one clear takeaway.",
        ],
        manager_line: "What you'd tell your manager: The project highlights {metric} by {dimension|segment}; next is to act on the top driver.",
    },
    // -----------------------------------------------------------------------
    // Week 5: SQL basics
    // -----------------------------------------------------------------------
    WeekPlan {
        titles: [
            "Select the right columns",
            "Filter with WHERE",
            "AND / OR logic",
            "IN, BETWEEN, LIKE",
            "Order and limit",
            "Handle NULLs",
            "Basic report query",
        ],
        micro_goals: [
            "Write a basic SELECT statement for a business question.",
            "Filter rows to the right time and segment.",
            "Combine filters correctly.",
            "Use IN/BETWEEN/LIKE for common filters.",
            "Sort results for quick review.",
            "Handle missing data safely.",
            "Build a clean query for a simple report.",
        ],
        plain_micro_goals: None,
        scenarios: [
            Scenario(&[("table", "orders"), ("metric", "revenue"), ("segment", "paid customers")]),
            Scenario(&[("table", "tickets"), ("metric", "tickets"), ("segment", "priority = high")]),
            Scenario(&[("table", "subscriptions"), ("metric", "active accounts"), ("segment", "plan = pro")]),
            Scenario(&[("table", "sessions"), ("metric", "sessions"), ("segment", "country = US")]),
            Scenario(&[("table", "leads"), ("metric", "leads"), ("segment", "channel = email")]),
            Scenario(&[("table", "shipments"), ("metric", "deliveries"), ("segment", "carrier = FastShip")]),
            Scenario(&[("table", "users"), ("metric", "sign-ups"), ("segment", "source = referral")]),
        ],
        scaffolds: None,
        intuition: "At a cafe, you only order the items you actually want, not everything on the menu.",
        questions: [
            q(Mcq, "Which query selects {metric} from {table}?",
                ["SELECT {metric} FROM {table};", "GET {metric} IN {table};", "PICK {metric} OF {table};", "SHOW {metric} WITH {table};"],
                0, "Correct. Use SELECT ... FROM."),
            q(Fix, "Fix the mistake: The query pulls all rows, but you only need {segment}.",
                ["Add a WHERE filter for {segment}.", "Remove the FROM clause.", "Add a GROUP BY without a filter.", "Order by a random column."],
                0, "Correct. Filter with WHERE."),
            q(Mcq, "You need rows that match two conditions. What do you use?",
                ["AND", "OR", "LIKE", "LIMIT"],
                0, "Correct. AND combines conditions."),
            q(Fix, "Fix the mistake: The query should match emails ending with .edu.",
                ["Use WHERE email LIKE '%.edu'.", "Use WHERE email IN '.edu'.", "Use WHERE email BETWEEN '.e' AND '.u'.", "Use WHERE email = '*.edu'."],
                0, "Correct. LIKE handles patterns."),
        ],
        focus: "SQL basics",
        skill_checks: [
            skill("Filter rows", "Which SQL clause filters rows?", Mcq,
                ["WHERE", "GROUP BY", "ORDER BY", "LIMIT"],
                "WHERE filters rows."),
            skill("Target segment", "Which clause limits results to {segment}?", Mcq,
                ["WHERE", "SELECT", "FROM", "JOIN"],
                "WHERE sets the filter condition."),
        ],
        checkpoint_bank: [
            cp(Mcq, "To pull {metric} from {table}, start with:",
                ["SELECT", "UPDATE", "DROP", "INSERT"],
                0, "SELECT reads data.", Easy),
            cp(Fix, "Fix the query: You filtered after aggregating.",
                ["Use WHERE before GROUP BY.", "Use LIMIT only.", "Remove WHERE.", "Sort first."],
                0, "WHERE filters rows before grouping.", Easy),
            cp(Mcq, "Which clause filters rows?",
                ["WHERE", "GROUP BY", "ORDER BY", "JOIN"],
                0, "WHERE filters rows.", Medium),
            cp(Mcq, "To match multiple values, use:",
                ["IN", "LIKE", "JOIN", "LIMIT"],
                0, "IN is for lists.", Medium),
            cp(Fix, "Fix the mistake: Results are unsorted.",
                ["Add ORDER BY for the main column.", "Add JOIN.", "Delete WHERE.", "Use DISTINCT only."],
                0, "ORDER BY sorts results.", Medium),
            cp(Mcq, "NULL values should be handled by:",
                ["Checking for NULL explicitly.", "Ignoring them always.", "Removing the table.", "Sorting first."],
                0, "Check NULLs to avoid surprises.", Hard),
        ],
        recap: [
            "Select only needed columns.",
            "Filter to the right segment.",
            "Order results for review.",
        ],
        manager_line: "What you'd tell your manager: The query isolates {segment|the target segment} and shows {metric} clearly.",
    },
    // -----------------------------------------------------------------------
    // Week 6: SQL aggregation
    // -----------------------------------------------------------------------
    WeekPlan {
        titles: [
            "Group by basics",
            "HAVING vs WHERE",
            "Join two tables",
            "Join with filters",
            "Aggregate after joins",
            "Avoid double counts",
            "SQL summary",
        ],
        micro_goals: [
            "Summarize data with GROUP BY.",
            "Filter aggregates with HAVING.",
            "Join tables for a fuller view.",
            "Combine joins and filters safely.",
            "Aggregate metrics after joining.",
            "Prevent double counting in joins.",
            "Deliver a clear SQL summary.",
        ],
        plain_micro_goals: None,
        scenarios: [
            Scenario(&[("left", "orders"), ("right", "customers"), ("metric", "revenue"), ("dimension", "customer")]),
            Scenario(&[("left", "tickets"), ("right", "agents"), ("metric", "tickets"), ("dimension", "agent")]),
            Scenario(&[("left", "subscriptions"), ("right", "plans"), ("metric", "active accounts"), ("dimension", "plan")]),
            Scenario(&[("left", "sessions"), ("right", "users"), ("metric", "sessions"), ("dimension", "user")]),
            Scenario(&[("left", "shipments"), ("right", "carriers"), ("metric", "on-time rate"), ("dimension", "carrier")]),
            Scenario(&[("left", "leads"), ("right", "campaigns"), ("metric", "leads"), ("dimension", "campaign")]),
            Scenario(&[("left", "orders"), ("right", "products"), ("metric", "units"), ("dimension", "category")]),
        ],
        scaffolds: None,
        intuition: "You group similar items together to see the biggest categories fast.",
        questions: [
            q(Mcq, "You need {metric} by {dimension}. Which clause is required?",
                ["GROUP BY", "ORDER BY", "LIMIT", "OFFSET"],
                0, "Correct. GROUP BY creates the summary."),
            q(Fix, "Fix the mistake: You filter SUM(revenue) using WHERE instead of HAVING.",
                ["Move the aggregate filter to HAVING.", "Remove GROUP BY.", "Use DISTINCT instead of SUM.", "Filter after exporting to Excel."],
                0, "Correct. HAVING filters aggregates."),
            q(Mcq, "You want all {left} even if there is no match in {right}. Which join?",
                ["LEFT JOIN", "INNER JOIN", "RIGHT JOIN", "FULL JOIN"],
                0, "Correct. LEFT JOIN keeps all left rows."),
            q(Fix, "Fix the mistake: Revenue doubled after a join because each order matches multiple rows.",
                ["Aggregate the detail table before joining.", "Add more columns to SELECT.", "Remove the join condition.", "Order by revenue."],
                0, "Correct. Aggregate before joining to avoid double counts."),
        ],
        focus: "SQL aggregation",
        skill_checks: [
            skill("Group the results", "To summarize {metric} by {dimension}, which clause is required?", Mcq,
                ["GROUP BY", "ORDER BY", "WHERE", "LIMIT"],
                "GROUP BY defines the aggregation group."),
            skill("Filter after grouping", "Which clause filters aggregated results?", Mcq,
                ["HAVING", "WHERE", "JOIN", "SELECT"],
                "HAVING filters after aggregation."),
        ],
        checkpoint_bank: [
            cp(Mcq, "GROUP BY is used to:",
                ["Summarize by category.", "Sort alphabetically.", "Delete rows.", "Rename columns."],
                0, "GROUP BY creates summaries.", Easy),
            cp(Fix, "Fix the mistake: You used WHERE on an aggregate.",
                ["Use HAVING for aggregate filters.", "Remove GROUP BY.", "Add LIMIT.", "Sort by id."],
                0, "HAVING filters aggregated results.", Easy),
            cp(Mcq, "A join should connect tables on:",
                ["Matching keys.", "Random columns.", "Row number only.", "Text length."],
                0, "Join on shared keys.", Medium),
            cp(Mcq, "After a join, you should:",
                ["Check for duplicates.", "Assume counts are fine.", "Delete a column.", "Skip validation."],
                0, "Joins can duplicate rows.", Medium),
            cp(Fix, "Fix the mistake: Aggregates are inflated after join.",
                ["Aggregate after the join with correct keys.", "Add more joins.", "Use SELECT *.", "Delete filters."],
                0, "Aggregate carefully after joining.", Medium),
            cp(Mcq, "To filter on totals, use:",
                ["HAVING", "WHERE", "ORDER BY", "LIMIT"],
                0, "HAVING filters aggregate results.", Hard),
        ],
        recap: [
            "Group before you summarize.",
            "Join on the right keys.",
            "Avoid double counting.",
        ],
        manager_line: "What you'd tell your manager: After joining {left} and {right}, {metric} stands out by {dimension|group}.",
    },
    // -----------------------------------------------------------------------
    // Week 7: BI basics
    // -----------------------------------------------------------------------
    WeekPlan {
        titles: [
            "Pick the right chart",
            "Build a KPI board",
            "Use filters",
            "Visual hierarchy",
            "Tell a clean story",
            "Highlight changes",
            "Dashboard check",
        ],
        micro_goals: [
            "Match chart type to the question.",
            "Create clear KPI cards.",
            "Add filters for common segments.",
            "Guide attention with layout and color.",
            "Remove clutter and focus the story.",
            "Highlight the biggest movement.",
            "Review the dashboard for clarity.",
        ],
        plain_micro_goals: None,
        scenarios: [
            Scenario(&[("dashboard", "sales overview"), ("metric", "revenue"), ("segment", "region")]),
            Scenario(&[("dashboard", "support health"), ("metric", "response time"), ("segment", "team")]),
            Scenario(&[("dashboard", "marketing performance"), ("metric", "lead conversion"), ("segment", "channel")]),
            Scenario(&[("dashboard", "product usage"), ("metric", "active users"), ("segment", "plan")]),
            Scenario(&[("dashboard", "delivery performance"), ("metric", "on-time rate"), ("segment", "carrier")]),
            Scenario(&[("dashboard", "finance snapshot"), ("metric", "gross margin"), ("segment", "category")]),
            Scenario(&[("dashboard", "growth report"), ("metric", "new accounts"), ("segment", "source")]),
        ],
        scaffolds: None,
        intuition: "Your car dashboard shows speed, fuel, and warnings at a glance.",
        questions: [
            q(Mcq, "Which chart best shows {metric} over time?",
                ["Line chart", "Pie chart", "Scatter plot", "Gauge only"],
                0, "Correct. Line charts show trends."),
            q(Fix, "Fix the mistake: The {dashboard} dashboard has 18 charts and no focus.",
                ["Keep a few KPIs and the main trend, remove extras.", "Add more colors to all charts.", "Use 3D charts for everything.", "Hide all labels."],
                0, "Correct. Reduce clutter and focus on the goal."),
            q(Mcq, "A KPI should be defined as:",
                ["A metric tied to a business goal.", "Any number that looks good.", "A chart with many colors.", "A table with all rows."],
                0, "Correct. KPIs track goals."),
            q(Fix, "Fix the mistake: There is no filter for {segment}, so users cannot drill in.",
                ["Add a {segment} filter or slicer.", "Remove the metric.", "Hide the chart title.", "Switch to a table only."],
                0, "Correct. Add the filter for exploration."),
        ],
        focus: "BI basics",
        skill_checks: [
            skill("Pick the chart", "To compare {metric} across {segment}, what chart fits best?", Mcq,
                ["Bar chart", "Pie chart", "Scatter plot", "Single KPI card"],
                "Bar charts compare categories clearly."),
            skill("KPI card focus", "A KPI card should show:", Mcq,
                ["One headline number.", "All filters and tables.", "Raw row data.", "Every chart on the page."],
                "KPI cards spotlight one number."),
        ],
        checkpoint_bank: [
            cp(Mcq, "A chart choice should match:",
                ["The question you are answering.", "Your favorite colors.", "Font size.", "Data source only."],
                0, "Pick charts for the question.", Easy),
            cp(Fix, "Fix the dashboard: It has too many KPIs.",
                ["Keep only the KPIs tied to the goal.", "Add more cards.", "Hide labels.", "Use random colors."],
                0, "Focus on the KPIs that matter.", Easy),
            cp(Mcq, "Filters help because they:",
                ["Let people see segments quickly.", "Hide the trend.", "Remove data.", "Change the source."],
                0, "Filters speed up exploration.", Medium),
            cp(Mcq, "Visual hierarchy means:",
                ["The most important info is easiest to see.", "Everything looks the same.", "All text is small.", "No titles."],
                0, "Guide attention to key info.", Medium),
            cp(Fix, "Fix the mistake: The dashboard is cluttered.",
                ["Remove non-essential visuals.", "Add more charts.", "Shrink all text.", "Hide the axes."],
                0, "Remove clutter to focus.", Medium),
            cp(Mcq, "Before sharing, you should:",
                ["Confirm filters and totals.", "Turn off legends.", "Delete the data model.", "Hide titles."],
                0, "Validate before sharing.", Hard),
        ],
        recap: [
            "Pick the right chart.",
            "Use clean hierarchy.",
            "Highlight one key change.",
        ],
        manager_line: "What you'd tell your manager: The dashboard makes {metric} by {segment|segment} easy to track.",
    },
    // -----------------------------------------------------------------------
    // Week 8: BI project
    // -----------------------------------------------------------------------
    WeekPlan {
        titles: [
            "Define dashboard goal",
            "Prepare the dataset",
            "Model relationships",
            "Build KPI cards",
            "Build trend view",
            "Add segment filters",
            "Final dashboard review",
        ],
        micro_goals: [
            "State the single question the dashboard answers.",
            "Clean the data before modeling.",
            "Set relationships so metrics are accurate.",
            "Create KPI cards that match the goal.",
            "Add a clear trend chart.",
            "Add filters for key segments.",
            "Validate the dashboard before sharing.",
        ],
        plain_micro_goals: None,
        scenarios: [
            Scenario(&[("project", "sales pipeline"), ("metric", "won deals"), ("segment", "region")]),
            Scenario(&[("project", "subscription health"), ("metric", "churn rate"), ("segment", "plan")]),
            Scenario(&[("project", "support load"), ("metric", "open tickets"), ("segment", "priority")]),
            Scenario(&[("project", "marketing ROI"), ("metric", "qualified leads"), ("segment", "channel")]),
            Scenario(&[("project", "product adoption"), ("metric", "feature usage"), ("segment", "plan")]),
            Scenario(&[("project", "delivery SLA"), ("metric", "late deliveries"), ("segment", "carrier")]),
            Scenario(&[("project", "inventory risk"), ("metric", "stockouts"), ("segment", "category")]),
        ],
        scaffolds: None,
        intuition: "You build a presentation board by choosing only the most important points.",
        questions: [
            q(Mcq, "For the {project} dashboard, what should be defined first?",
                ["The single business question the dashboard answers.", "All possible charts.", "The final colors.", "The largest font size."],
                0, "Correct. Start with the goal."),
            q(Fix, "Fix the mistake: The dataset still has duplicates and missing values.",
                ["Clean the data before building visuals.", "Build the dashboard anyway.", "Hide the bad rows with a filter.", "Replace all missing values with zero without review."],
                0, "Correct. Clean the data first."),
            q(Mcq, "What should KPI cards show for {project}?",
                ["The headline metrics like {metric}.", "Every column in the dataset.", "Only chart titles.", "A random sample of rows."],
                0, "Correct. KPI cards show the headline metrics."),
            q(Fix, "Fix the mistake: The trend chart uses a different date range than the KPIs.",
                ["Align the date ranges across all visuals.", "Remove the KPIs.", "Change the chart type.", "Only show one month."],
                0, "Correct. Keep date ranges consistent."),
        ],
        focus: "BI project",
        skill_checks: [
            skill("Dashboard goal", "Before building a {project} dashboard, do what?", Mcq,
                ["Write the single question it answers.", "Choose colors.", "Add every chart type.", "Export CSVs."],
                "The goal drives the layout."),
            skill("Keep filters clean", "Filters should be added for:", Mcq,
                ["Common segments people ask about.", "Every column in the dataset.", "Random categories.", "Hidden fields only."],
                "Filters should match frequent questions."),
        ],
        checkpoint_bank: [
            cp(Mcq, "A dashboard project starts with:",
                ["A single goal question.", "Colors and fonts.", "Chart types only.", "No data prep."],
                0, "Start with the goal.", Easy),
            cp(Fix, "Fix the model: Relationships are missing.",
                ["Define relationships before building visuals.", "Add more charts.", "Hide tables.", "Use only CSVs."],
                0, "Relationships keep metrics correct.", Easy),
            cp(Mcq, "KPI cards should show:",
                ["Key numbers tied to the goal.", "Every table name.", "Random stats.", "No context."],
                0, "Keep KPI cards focused.", Medium),
            cp(Mcq, "A trend view should:",
                ["Show change over time clearly.", "Hide dates.", "Use only pie charts.", "Remove labels."],
                0, "Trends need time on the axis.", Medium),
            cp(Fix, "Fix the mistake: Filters are missing.",
                ["Add filters for main segments.", "Delete all slicers.", "Hide legends.", "Use only one color."],
                0, "Filters make dashboards useful.", Medium),
            cp(Mcq, "Final review checks:",
                ["Totals, filters, and titles.", "Only colors.", "Only fonts.", "Nothing at all."],
                0, "Check the basics before sharing.", Hard),
        ],
        recap: [
            "Start with the dashboard goal.",
            "Model data cleanly.",
            "Validate before sharing.",
        ],
        manager_line: "What you'd tell your manager: The {project} view keeps {metric} front and center with clean filters.",
    },
    // -----------------------------------------------------------------------
    // Week 9: Python basics
    // -----------------------------------------------------------------------
    WeekPlan {
        titles: [
            "Load a CSV",
            "Inspect columns",
            "Clean column names",
            "Handle missing data",
            "Filter rows",
            "Create new columns",
            "Export clean data",
        ],
        micro_goals: [
            "Load data with pandas.",
            "Inspect columns and data types.",
            "Standardize column names.",
            "Handle missing values safely.",
            "Filter rows for analysis.",
            "Create a simple calculated column.",
            "Export clean data for sharing.",
        ],
        plain_micro_goals: None,
        scenarios: [
            Scenario(&[("file", "orders.csv"), ("metric", "revenue"), ("column", "Order Status")]),
            Scenario(&[("file", "tickets.csv"), ("metric", "tickets"), ("column", "Priority")]),
            Scenario(&[("file", "subscriptions.csv"), ("metric", "active"), ("column", "Plan")]),
            Scenario(&[("file", "sessions.csv"), ("metric", "sessions"), ("column", "Country")]),
            Scenario(&[("file", "leads.csv"), ("metric", "leads"), ("column", "Channel")]),
            Scenario(&[("file", "shipments.csv"), ("metric", "deliveries"), ("column", "Carrier")]),
            Scenario(&[("file", "products.csv"), ("metric", "units"), ("column", "Category")]),
        ],
        scaffolds: None,
        intuition: "You use a tool to tidy a long list quickly, so you can work with it.",
        questions: [
            q(Mcq, "Which pandas function loads a CSV file?",
                ["pd.read_csv()", "pd.open()", "pd.load()", "pd.select()"],
                0, "Correct. read_csv loads a CSV."),
            q(Fix, "Fix the mistake: Column names have spaces and mixed cases.",
                ["Use df.columns = df.columns.str.strip().str.lower()", "Rename one column only.", "Sort the dataframe.", "Drop the column names."],
                0, "Correct. Standardize column names."),
            q(Mcq, "How do you filter rows where {column} equals \"High\"?",
                ["df[df[\"{column}\"] == \"High\"]", "df.filter(\"{column} = High\")", "df.where(\"{column}\" = \"High\")", "df.only(\"{column}\", \"High\")"],
                0, "Correct. Use a boolean mask."),
            q(Fix, "Fix the mistake: You need a new column for revenue after discount.",
                ["Use df[\"net_revenue\"] = df[\"revenue\"] - df[\"discount\"].", "Use df.net_revenue() with no inputs.", "Delete the discount column.", "Change the column order."],
                0, "Correct. Create the column with a simple calculation."),
        ],
        focus: "Python basics",
        skill_checks: [
            skill("Load a CSV", "How do you load {file} in pandas?", Mcq,
                ["pd.read_csv()", "pd.load()", "pd.open()", "pd.import_csv()"],
                "read_csv loads a CSV file."),
            skill("Clean column names", "Which step standardizes column names?", Fix,
                ["df.columns = df.columns.str.strip().str.lower()", "df.sort_values()", "df.dropna()", "df.describe()"],
                "Strip and lower names before analysis."),
        ],
        checkpoint_bank: [
            cp(Mcq, "To load {file}, use:",
                ["read_csv", "groupby", "merge", "plot"],
                0, "read_csv loads files.", Easy),
            cp(Fix, "Fix the mistake: Column names have spaces.",
                ["Standardize names (lowercase, underscores).", "Add more columns.", "Hide headers.", "Drop all columns."],
                0, "Clean names before analysis.", Easy),
            cp(Mcq, "To inspect column types, use:",
                ["info()", "sum()", "merge()", "plot()"],
                0, "info() shows types and nulls.", Medium),
            cp(Mcq, "Missing values should be handled by:",
                ["Filling or removing based on the goal.", "Ignoring always.", "Deleting the file.", "Sorting only."],
                0, "Handle missing values on purpose.", Medium),
            cp(Fix, "Fix the mistake: You filtered after exporting.",
                ["Filter before exporting clean data.", "Export raw data only.", "Delete the filter.", "Rename the file."],
                0, "Filter before export.", Medium),
            cp(Mcq, "A new column can be created by:",
                ["Combining or calculating from existing columns.", "Changing colors.", "Renaming the file.", "Sorting."],
                0, "Create derived columns with simple rules.", Hard),
        ],
        recap: [
            "Load files correctly.",
            "Clean columns first.",
            "Handle missing values.",
        ],
        manager_line: "What you'd tell your manager: The CSV is clean, so {metric} by {column|category} is trustworthy.",
    },
    // -----------------------------------------------------------------------
    // Week 10: Python analysis
    // -----------------------------------------------------------------------
    WeekPlan {
        titles: [
            "Group and summarize",
            "Trend over time",
            "Segment by category",
            "Top and bottom",
            "Simple pivot",
            "Merge datasets",
            "Write a summary",
        ],
        micro_goals: [
            "Summarize data with groupby.",
            "Build a simple time trend.",
            "Compare segments clearly.",
            "Find top and bottom performers.",
            "Create a pivot-style summary.",
            "Merge two datasets safely.",
            "Write a business summary from results.",
        ],
        plain_micro_goals: None,
        scenarios: [
            Scenario(&[("metric", "revenue"), ("dimension", "region")]),
            Scenario(&[("metric", "tickets"), ("dimension", "issue type")]),
            Scenario(&[("metric", "active users"), ("dimension", "plan")]),
            Scenario(&[("metric", "conversion rate"), ("dimension", "channel")]),
            Scenario(&[("metric", "on-time rate"), ("dimension", "carrier")]),
            Scenario(&[("metric", "refunds"), ("dimension", "reason")]),
            Scenario(&[("metric", "feature usage"), ("dimension", "feature")]),
        ],
        scaffolds: None,
        intuition: "You compare shelves in a pantry to see which one empties fastest.",
        questions: [
            q(Mcq, "Which pandas pattern summarizes {metric} by {dimension}?",
                ["df.groupby(\"{dimension}\")[\"{metric}\"].sum()", "df.sort(\"{metric}\")", "df.drop(\"{dimension}\")", "df.rename(\"{metric}\")"],
                0, "Correct. groupby creates the summary."),
            q(Fix, "Fix the mistake: You created a trend but forgot to sort by date.",
                ["Sort by date before plotting or summarizing.", "Sort by a random column.", "Hide the date column.", "Use only the latest day."],
                0, "Correct. Sort by date first."),
            q(Mcq, "You need the top 5 {dimension} by {metric}. What is the last step?",
                ["Sort descending and take head(5).", "Sort ascending and take tail(5).", "Drop duplicates.", "Fill missing values."],
                0, "Correct. Sort descending then head(5)."),
            q(Fix, "Fix the mistake: You merged two tables using the wrong key.",
                ["Merge on the shared unique ID column.", "Merge on row order.", "Merge on a column with duplicates only.", "Skip the merge and paste manually."],
                0, "Correct. Use the correct unique key."),
        ],
        focus: "Python analysis",
        skill_checks: [
            skill("Group in pandas", "Which pattern summarizes {metric} by {dimension}?", Mcq,
                ["df.groupby(\"{dimension}\")[\"{metric}\"].sum()", "df.sort_values()", "df.dropna()", "df.rename()"],
                "Use groupby with a summary."),
            skill("Trend check", "What is the first step before plotting a trend?", Mcq,
                ["Sort by date.", "Drop the date column.", "Shuffle the data.", "Convert to text only."],
                "Sort before plotting time series."),
        ],
        checkpoint_bank: [
            cp(Mcq, "groupby is used to:",
                ["Summarize by category.", "Sort columns.", "Drop rows.", "Change data types."],
                0, "groupby summarizes by group.", Easy),
            cp(Fix, "Fix the mistake: You plotted before sorting by date.",
                ["Sort by date, then plot.", "Remove the date.", "Shuffle rows.", "Use only bar charts."],
                0, "Sort time series first.", Easy),
            cp(Mcq, "Segmentation helps you:",
                ["Compare groups clearly.", "Hide differences.", "Skip labels.", "Remove columns."],
                0, "Segments show differences.", Medium),
            cp(Mcq, "Top and bottom views help you:",
                ["Find best and worst performers.", "Remove all data.", "Ignore trends.", "Hide outliers."],
                0, "Rank to see extremes.", Medium),
            cp(Fix, "Fix the mistake: You merged without checking keys.",
                ["Validate keys before merging.", "Merge on row number.", "Ignore duplicates.", "Drop both tables."],
                0, "Check keys first.", Medium),
            cp(Mcq, "A good summary line includes:",
                ["Metric, change, and action.", "Only tools used.", "Every row count.", "No context."],
                0, "Keep it action-ready.", Hard),
        ],
        recap: [
            "Group to compare segments.",
            "Check trends over time.",
            "Summarize with one clear line.",
        ],
        manager_line: "What you'd tell your manager: Grouping shows {metric} differs by {dimension|segment}; we should focus on the top group.",
    },
    // -----------------------------------------------------------------------
    // Week 11: advanced analysis
    // -----------------------------------------------------------------------
    WeekPlan {
        titles: [
            "Define a cohort",
            "Cohort comparison",
            "Retention logic",
            "A/B test logic",
            "Guardrail metrics",
            "Sanity checks",
            "Recommendation",
        ],
        micro_goals: [
            "Group users by a shared start date.",
            "Compare cohorts fairly.",
            "Interpret retention without heavy math.",
            "Understand basic A/B test logic.",
            "Use guardrail metrics to avoid harm.",
            "Validate results before sharing.",
            "Recommend a next step based on evidence.",
        ],
        plain_micro_goals: None,
        scenarios: [
            Scenario(&[("product", "subscription app"), ("metric", "week 2 retention")]),
            Scenario(&[("product", "learning app"), ("metric", "lesson completion")]),
            Scenario(&[("product", "marketplace"), ("metric", "repeat buyers")]),
            Scenario(&[("product", "support tool"), ("metric", "ticket resolution")]),
            Scenario(&[("product", "delivery app"), ("metric", "on-time rate")]),
            Scenario(&[("product", "ecommerce site"), ("metric", "checkout conversion")]),
            Scenario(&[("product", "B2B SaaS"), ("metric", "active accounts")]),
        ],
        scaffolds: None,
        intuition: "You compare two teams after giving them the same starting resources.",
        questions: [
            q(Mcq, "A cohort is best defined by:",
                ["A shared start event, like signup month.", "A random sample of users.", "The largest segment only.", "Anyone active today."],
                0, "Correct. Use a shared start event."),
            q(Fix, "Fix the mistake: You compare cohorts using different time windows.",
                ["Use the same time window for each cohort.", "Only show the biggest cohort.", "Remove the time columns.", "Use different metrics for each cohort."],
                0, "Correct. Compare like with like."),
            q(Mcq, "In an A/B test, what must be true before calling a winner?",
                ["Both groups were run at the same time with the same rules.", "One group was much larger and ran longer.", "Only clicks improved.", "You prefer one design."],
                0, "Correct. Keep the test fair and consistent."),
            q(Fix, "Fix the mistake: {metric} improved, but customer complaints spiked.",
                ["Check a guardrail metric before recommending rollout.", "Ignore complaints because the main metric improved.", "Ship the change immediately.", "Stop tracking the guardrail metric."],
                0, "Correct. Guardrails prevent harm."),
        ],
        focus: "advanced analysis",
        skill_checks: [
            skill("Define a cohort", "A cohort is grouped by:", Mcq,
                ["A shared start date.", "A random sample.", "Only top spenders.", "Anyone active today."],
                "Cohorts share a start event."),
            skill("Guardrail check", "A guardrail metric exists to:", Mcq,
                ["Catch unintended harm.", "Make charts prettier.", "Replace all KPIs.", "Slow down reporting."],
                "Guardrails protect users and the business."),
        ],
        checkpoint_bank: [
            cp(Mcq, "A cohort groups users by:",
                ["The same start event.", "Random picks.", "Only top spenders.", "One location only."],
                0, "Cohorts share a start.", Easy),
            cp(Fix, "Fix the mistake: You compared cohorts from different start months.",
                ["Compare cohorts with the same timeline.", "Mix all cohorts.", "Drop the date.", "Hide the chart."],
                0, "Align cohorts by time since start.", Easy),
            cp(Mcq, "Retention means:",
                ["How many users return over time.", "Total downloads.", "Number of charts.", "Emails sent."],
                0, "Retention tracks repeat usage.", Medium),
            cp(Mcq, "In an A/B test, you should:",
                ["Keep the groups consistent.", "Change rules mid-test.", "Stop tracking guardrails.", "Pick a winner on day one."],
                0, "Consistency keeps tests fair.", Medium),
            cp(Fix, "Fix the mistake: You ignored a guardrail metric.",
                ["Check guardrails before deciding.", "Ignore it if the main metric is up.", "Delete the guardrail.", "Stop the test."],
                0, "Guardrails prevent harm.", Medium),
            cp(Mcq, "A final recommendation should:",
                ["State the next step clearly.", "List every tool.", "Hide results.", "Skip the action."],
                0, "Recommendations need an action.", Hard),
        ],
        recap: [
            "Compare like with like.",
            "Watch guardrail signals.",
            "Recommend the next step.",
        ],
        manager_line: "What you'd tell your manager: Cohort comparisons show {metric} shifted; we should test the next change carefully.",
    },
    // -----------------------------------------------------------------------
    // Week 12: job readiness
    // -----------------------------------------------------------------------
    WeekPlan {
        titles: [
            "Clarify the case",
            "Pick the right metric",
            "Clean and analyze",
            "Explain the chart",
            "Executive summary",
            "Interview drills",
            "Final review",
        ],
        micro_goals: [
            "Ask clarifying questions before you analyze.",
            "Choose the metric that matches the goal.",
            "Clean data and answer the prompt.",
            "Explain a chart in plain language.",
            "Write a short executive summary.",
            "Practice common interview prompts.",
            "Review your full analysis flow.",
        ],
        plain_micro_goals: None,
        scenarios: [
            Scenario(&[("case", "subscription churn"), ("metric", "churn rate")]),
            Scenario(&[("case", "sales decline"), ("metric", "weekly revenue")]),
            Scenario(&[("case", "support backlog"), ("metric", "open tickets")]),
            Scenario(&[("case", "marketing ROI"), ("metric", "qualified leads")]),
            Scenario(&[("case", "product adoption"), ("metric", "feature usage")]),
            Scenario(&[("case", "delivery delays"), ("metric", "late deliveries")]),
            Scenario(&[("case", "inventory risk"), ("metric", "stockouts")]),
        ],
        scaffolds: None,
        intuition: "You practice telling a short story so people understand it right away.",
        questions: [
            q(Mcq, "In a case about {case}, what should you ask first?",
                ["What business decision will this analysis support?", "What is your favorite chart type?", "Can I skip data cleaning?", "Should I code everything?"],
                0, "Correct. Start with the decision."),
            q(Fix, "Fix the mistake: Your insight is too technical for a business audience.",
                ["State the impact in business terms and the recommended action.", "Add more formulas.", "Show every row of data.", "Use jargon to sound advanced."],
                0, "Correct. Keep it business-focused."),
            q(Mcq, "Which structure is best for an interview answer?",
                ["Context, insight, action.", "Tool list, code, appendix.", "Random facts.", "Only the chart title."],
                0, "Correct. Keep the story clear."),
            q(Fix, "Fix the mistake: You jump to a conclusion before checking data quality.",
                ["Verify data quality before finalizing the conclusion.", "Skip validation to save time.", "Only check one row.", "Use a different chart."],
                0, "Correct. Validate before concluding."),
        ],
        focus: "job readiness",
        skill_checks: [
            skill("Clarify the case", "In a case interview, ask first:", Mcq,
                ["What decision will this support?", "Which chart do you prefer?", "Can we skip cleaning?", "What is the font size?"],
                "Start with the decision."),
            skill("Story structure", "The best structure is:", Mcq,
                ["Context, insight, action.", "Tools, code, appendix.", "Random facts.", "Only the chart title."],
                "Keep the story short and clear."),
        ],
        checkpoint_bank: [
            cp(Mcq, "A good case kickoff question is:",
                ["What decision will this support?", "What colors do you prefer?", "Can we skip cleaning?", "What is the font size?"],
                0, "Start with the decision.", Easy),
            cp(Fix, "Fix the mistake: You jumped to charts without cleaning.",
                ["Check data quality first.", "Add more visuals.", "Hide the table.", "Ignore missing values."],
                0, "Clean before charting.", Easy),
            cp(Mcq, "When explaining a chart, lead with:",
                ["The key change and why it matters.", "Every axis detail.", "Your tool choice.", "The colors used."],
                0, "Lead with insight.", Medium),
            cp(Mcq, "An executive summary should be:",
                ["Short, clear, and actionable.", "Long and technical.", "Only charts.", "Only raw data."],
                0, "Keep it short and clear.", Medium),
            cp(Fix, "Fix the interview answer: It is tool-only.",
                ["Add context, insight, and action.", "List more tools.", "Shorten to one word.", "Remove the outcome."],
                0, "Stories beat tool lists.", Medium),
            cp(Mcq, "A strong closing line is:",
                ["I found the change, explained impact, and recommended a next step.", "I used many tools.", "The data was big.", "I made charts."],
                0, "End with impact and action.", Hard),
        ],
        recap: [
            "Clarify the decision.",
            "Explain in plain language.",
            "Practice the story.",
        ],
        manager_line: "What you'd tell your manager: For {case}, the key driver is {metric}; my recommendation is a focused follow-up.",
    },
];
