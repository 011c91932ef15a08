//! Built-in namespace and tool tables.

use super::descriptor::{Integration, NamespaceDescriptor, ParamSpec, ToolDescriptor};
use crate::agents::channel::Platform;
use crate::agents::Handler;

const XAI: &[Integration] = &[Integration::Xai];
const XAI_PAGES: &[Integration] = &[Integration::Xai, Integration::Pages];
const ARCADE: &[Integration] = &[Integration::Arcade];
const POSTING: &[Integration] = &[Integration::Xai, Integration::Pages, Integration::Arcade];

const TONES: &[&str] = &["professional", "casual", "urgent", "friendly"];
const CHANNELS: &[&str] = &["x", "twitter", "linkedin", "li", "all"];
const BOOL: &[&str] = &["true", "false"];

pub static NAMESPACES: &[NamespaceDescriptor] = &[
    NamespaceDescriptor {
        name: "content",
        description: "Content creation, copywriting, email sequences",
        handler: Handler::Content,
        tools: CONTENT_TOOLS,
    },
    NamespaceDescriptor {
        name: "strategy",
        description: "Launch planning, pricing, marketing psychology",
        handler: Handler::Strategy,
        tools: STRATEGY_TOOLS,
    },
    NamespaceDescriptor {
        name: "social",
        description: "Post to X/LinkedIn, scheduling, analytics",
        handler: Handler::Social,
        tools: SOCIAL_TOOLS,
    },
    NamespaceDescriptor {
        name: "cro",
        description: "Conversion rate optimization & page analysis",
        handler: Handler::Cro,
        tools: CRO_TOOLS,
    },
    NamespaceDescriptor {
        name: "seo",
        description: "SEO audits, schema markup, competitor analysis",
        handler: Handler::Seo,
        tools: SEO_TOOLS,
    },
    NamespaceDescriptor {
        name: "ads",
        description: "Paid advertising, A/B testing, analytics",
        handler: Handler::Ads,
        tools: ADS_TOOLS,
    },
    NamespaceDescriptor {
        name: "x",
        description: "Summarise a URL and post it to X (Twitter)",
        handler: Handler::Channel(Platform::X),
        tools: X_TOOLS,
    },
    NamespaceDescriptor {
        name: "linkedin",
        description: "Summarise a URL and post it to LinkedIn",
        handler: Handler::Channel(Platform::LinkedIn),
        tools: LINKEDIN_TOOLS,
    },
];

const CONTENT_TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "copywriting",
        description: "Generate marketing copy for any format",
        long_help: "Generate marketing copy for headlines, landing pages, CTAs, and more. \
                    Powered by XAI/Grok. Respects product context if set.",
        aliases: &["copy"],
        examples: &[
            "content:copywriting topic:\"SaaS landing page hero\" format:headline",
            "content:copywriting topic:\"Feature announcement\" tone:casual",
            "content:copy topic:\"Pricing page value prop\" format:bullet",
        ],
        integrations: XAI,
        params: &[
            ParamSpec::required("topic", "What to write about"),
            ParamSpec::optional("format", "Output format")
                .default("paragraph")
                .options(&["headline", "paragraph", "bullet", "cta"]),
            ParamSpec::optional("tone", "Writing tone")
                .default("professional")
                .options(TONES),
            ParamSpec::optional("platform", "Target platform").options(&["web", "email", "social"]),
        ],
        estimated_seconds: 10,
    },
    ToolDescriptor {
        name: "copy-editing",
        description: "Review and improve existing copy",
        long_help: "Analyze existing copy and provide improvements for clarity, persuasion, and conciseness.",
        aliases: &["edit"],
        examples: &[
            "content:copy-editing input:\"Our product helps businesses grow faster with AI.\"",
            "content:edit input:\"Sign up now for free\" goal:persuasion",
        ],
        integrations: XAI,
        params: &[
            ParamSpec::required("input", "The copy to review and improve"),
            ParamSpec::optional("goal", "Editing focus")
                .default("all")
                .options(&["clarity", "persuasion", "conciseness", "all"]),
        ],
        estimated_seconds: 10,
    },
    ToolDescriptor {
        name: "social-content",
        description: "Platform-optimized social media posts",
        long_help: "Generate social media posts optimized for specific platforms. \
                    X posts are kept under 280 chars, LinkedIn posts are long-form professional.",
        aliases: &["social"],
        examples: &[
            "content:social-content platform:x topic:\"product launch\"",
            "content:social-content platform:linkedin topic:\"hiring announcement\"",
        ],
        integrations: XAI,
        params: &[
            ParamSpec::required("topic", "What to post about"),
            ParamSpec::optional("platform", "Target social platform")
                .default("x")
                .options(&["x", "linkedin", "both"]),
            ParamSpec::optional("tone", "Writing tone").default("professional"),
        ],
        estimated_seconds: 10,
    },
    ToolDescriptor {
        name: "email-sequence",
        description: "Multi-step email drip sequences",
        long_help: "Design multi-step email drip sequences with subject lines, body copy, \
                    and timing recommendations.",
        aliases: &["email"],
        examples: &[
            "content:email-sequence type:onboarding steps:5",
            "content:email topic:\"trial expiring\" type:retention steps:3",
        ],
        integrations: XAI,
        params: &[
            ParamSpec::optional("type", "Sequence type")
                .default("onboarding")
                .options(&["onboarding", "nurture", "retention", "upsell", "reactivation"]),
            ParamSpec::optional("topic", "Email sequence topic/trigger"),
            ParamSpec::optional("steps", "Number of emails in sequence").default("5"),
        ],
        estimated_seconds: 20,
    },
    ToolDescriptor {
        name: "cold-email",
        description: "B2B prospecting email sequences",
        long_help: "Generate B2B cold email sequences with personalization placeholders, \
                    subject lines, and follow-ups.",
        aliases: &["cold"],
        examples: &["content:cold-email target:\"SaaS CTOs\" product:\"analytics platform\" steps:3"],
        integrations: XAI,
        params: &[
            ParamSpec::required("target", "Target persona/role"),
            ParamSpec::optional("product", "Product being pitched"),
            ParamSpec::optional("steps", "Number of emails in sequence").default("3"),
            ParamSpec::optional("tone", "Writing tone").default("professional"),
        ],
        estimated_seconds: 20,
    },
    ToolDescriptor {
        name: "ad-creative",
        description: "Ad headlines and descriptions for ad platforms",
        long_help: "Generate ad creative (headlines, descriptions) optimized for Google, Meta, \
                    LinkedIn, or TikTok ads.",
        aliases: &["ads"],
        examples: &[
            "content:ad-creative platform:google topic:\"project management tool\" format:responsive",
            "content:ad-creative platform:meta topic:\"fitness app\" audience:\"millennials\"",
        ],
        integrations: XAI,
        params: &[
            ParamSpec::required("topic", "What to advertise"),
            ParamSpec::optional("platform", "Ad platform")
                .default("google")
                .options(&["google", "meta", "linkedin", "tiktok"]),
            ParamSpec::optional("format", "Ad format")
                .default("standard")
                .options(&["standard", "responsive", "carousel"]),
            ParamSpec::optional("audience", "Target audience description"),
        ],
        estimated_seconds: 10,
    },
    ToolDescriptor {
        name: "content-strategy",
        description: "Content planning, topic clusters, keyword mapping",
        long_help: "Develop a content strategy including topic clusters, keyword mapping, \
                    content calendar ideas, and distribution plan.",
        aliases: &["plan"],
        examples: &[
            "content:content-strategy topic:\"B2B SaaS marketing\" months:3",
            "content:plan topic:\"developer tools\" format:calendar",
        ],
        integrations: XAI,
        params: &[
            ParamSpec::required("topic", "Main topic or business area"),
            ParamSpec::optional("months", "Planning horizon in months").default("3"),
            ParamSpec::optional("format", "Output format")
                .default("strategy")
                .options(&["strategy", "calendar", "clusters"]),
        ],
        estimated_seconds: 20,
    },
];

const STRATEGY_TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "launch",
        description: "Product launch planning",
        long_help: "Create a product launch plan covering timeline, channel strategies, \
                    messaging, KPIs, and risk mitigation.",
        aliases: &["go-to-market", "gtm"],
        examples: &[
            "strategy:launch product:\"AI writing assistant\" stage:pre-launch",
            "strategy:gtm product:\"Team chat\" channels:\"producthunt,x,linkedin\"",
        ],
        integrations: XAI,
        params: &[
            ParamSpec::required("product", "Product being launched"),
            ParamSpec::optional("stage", "Launch phase")
                .default("full")
                .options(&["pre-launch", "launch-day", "post-launch", "full"]),
            ParamSpec::optional("channels", "Comma-separated launch channels"),
        ],
        estimated_seconds: 20,
    },
    ToolDescriptor {
        name: "pricing",
        description: "Pricing strategy and packaging",
        long_help: "Develop pricing tiers, feature gates, value metrics, and competitive positioning.",
        aliases: &["price"],
        examples: &[
            "strategy:pricing product:\"API monitoring\" model:usage-based",
            "strategy:price product:\"CRM\" competitors:\"HubSpot,Pipedrive\"",
        ],
        integrations: XAI,
        params: &[
            ParamSpec::required("product", "Product to price"),
            ParamSpec::optional("model", "Pricing model")
                .options(&["freemium", "tiered", "usage-based", "flat-rate", "hybrid"]),
            ParamSpec::optional("competitors", "Comma-separated competitor names"),
        ],
        estimated_seconds: 20,
    },
    ToolDescriptor {
        name: "referral",
        description: "Referral and affiliate program design",
        long_help: "Design a referral program: mechanics, incentive structure, viral loops, \
                    tracking setup, and growth projections.",
        aliases: &["affiliate"],
        examples: &["strategy:referral product:\"Design tool\" type:two-sided incentive:credit"],
        integrations: XAI,
        params: &[
            ParamSpec::required("product", "Product for referral program"),
            ParamSpec::optional("type", "Program type")
                .default("two-sided")
                .options(&["one-sided", "two-sided", "tiered", "affiliate"]),
            ParamSpec::optional("incentive", "Incentive type")
                .default("discount")
                .options(&["discount", "credit", "cash", "feature-unlock"]),
        ],
        estimated_seconds: 15,
    },
    ToolDescriptor {
        name: "product-context",
        description: "View or set shared product context",
        long_help: "Show the product context shared by every tool, or update it by passing \
                    any of its fields. The context is injected into every generation prompt.",
        aliases: &["ctx"],
        examples: &[
            "strategy:product-context",
            "strategy:ctx company:Acme product:\"Acme Analytics\" audience:\"data teams\"",
        ],
        integrations: &[],
        params: &[
            ParamSpec::optional("company", "Company name"),
            ParamSpec::optional("product", "Product name/description"),
            ParamSpec::optional("audience", "Target audience"),
            ParamSpec::optional("tone", "Default tone"),
            ParamSpec::optional("industry", "Industry vertical"),
            ParamSpec::optional("website", "Company website").url(),
            ParamSpec::optional("competitors", "Comma-separated competitor names"),
            ParamSpec::optional("value-proposition", "Core value proposition"),
        ],
        estimated_seconds: 1,
    },
    ToolDescriptor {
        name: "ideas",
        description: "Marketing idea brainstorming",
        long_help: "Generate actionable marketing ideas with effort and impact estimates.",
        aliases: &["brainstorm"],
        examples: &[
            "strategy:ideas topic:\"developer community growth\" count:15",
            "strategy:brainstorm topic:\"B2B lead gen\" channel:linkedin",
        ],
        integrations: XAI,
        params: &[
            ParamSpec::required("topic", "Marketing area or challenge"),
            ParamSpec::optional("count", "Number of ideas").default("10"),
            ParamSpec::optional("channel", "Focus on specific channel"),
        ],
        estimated_seconds: 20,
    },
    ToolDescriptor {
        name: "psychology",
        description: "Apply behavioral science to marketing",
        long_help: "Apply marketing psychology principles (Cialdini, Kahneman, Fogg) with \
                    concrete copy and UX examples.",
        aliases: &["psych", "behavioral"],
        examples: &[
            "strategy:psychology context:\"pricing page\" goal:conversion",
            "strategy:psych context:\"onboarding emails\" principle:\"commitment\"",
        ],
        integrations: XAI,
        params: &[
            ParamSpec::required("context", "Where to apply psychology (page, flow, campaign)"),
            ParamSpec::optional("principle", "Specific principle to apply"),
            ParamSpec::optional("goal", "Desired outcome")
                .options(&["conversion", "retention", "activation", "referral"]),
        ],
        estimated_seconds: 20,
    },
];

const SOCIAL_TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "post",
        description: "Post to X and/or LinkedIn",
        long_help: "Post content to social media platforms via Arcade.dev. \
                    Supports X (Twitter) and LinkedIn; channel:all posts to both in turn.",
        aliases: &["publish"],
        examples: &[
            "social:post channel:x content:\"Exciting new feature launch!\"",
            "social:post channel:linkedin content:\"We are hiring!\" url:https://tendly.eu/jobs",
            "social:post channel:all content:\"Big announcement!\" dry-run:true",
        ],
        integrations: ARCADE,
        params: &[
            ParamSpec::required("channel", "Platform to post to").options(CHANNELS),
            ParamSpec::required("content", "Text content to post"),
            ParamSpec::optional("url", "URL to include in the post").url(),
            ParamSpec::optional("dry-run", "Preview without posting")
                .default("false")
                .options(BOOL),
        ],
        estimated_seconds: 5,
    },
    ToolDescriptor {
        name: "schedule",
        description: "Queue posts for later",
        long_help: "Schedule social media posts for future publication.",
        aliases: &["queue"],
        examples: &["social:schedule channel:x content:\"Monday motivation!\" time:\"2024-03-01 09:00\""],
        integrations: &[Integration::Composio],
        params: &[
            ParamSpec::required("channel", "Platform to schedule for").options(CHANNELS),
            ParamSpec::required("content", "Text content to schedule"),
            ParamSpec::required("time", "ISO datetime or relative time"),
        ],
        estimated_seconds: 2,
    },
    ToolDescriptor {
        name: "analytics",
        description: "View post performance metrics",
        long_help: "View engagement metrics for recent social media posts.",
        aliases: &["stats", "metrics"],
        examples: &["social:analytics channel:x days:7", "social:analytics channel:linkedin"],
        integrations: &[Integration::Composio],
        params: &[
            ParamSpec::optional("channel", "Platform to view analytics for")
                .default("all")
                .options(CHANNELS),
            ParamSpec::optional("days", "Number of days to look back").default("7"),
        ],
        estimated_seconds: 5,
    },
];

const CRO_TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "page-cro",
        description: "Full conversion audit of a landing page",
        long_help: "Fetch a page and audit hero section, CTAs, social proof, trust signals, \
                    copy clarity, and page speed signals.",
        aliases: &["analyze", "page"],
        examples: &[
            "cro:page-cro url:https://example.com",
            "cro:analyze url:https://example.com/pricing focus:\"CTA placement\"",
        ],
        integrations: XAI_PAGES,
        params: &[
            ParamSpec::required("url", "Page URL to analyze").url(),
            ParamSpec::optional("focus", "Specific area to focus on"),
        ],
        estimated_seconds: 25,
    },
    ToolDescriptor {
        name: "signup-flow",
        description: "Signup flow friction analysis",
        long_help: "Analyze form fields, friction points, social login options, and value proposition clarity.",
        aliases: &["signup"],
        examples: &["cro:signup-flow url:https://example.com/signup"],
        integrations: XAI_PAGES,
        params: &[ParamSpec::required("url", "Signup page URL").url()],
        estimated_seconds: 25,
    },
    ToolDescriptor {
        name: "onboarding",
        description: "First-run onboarding experience review",
        long_help: "Review progressive disclosure, time to value, and activation milestones.",
        aliases: &["onboard"],
        examples: &["cro:onboarding url:https://example.com/welcome"],
        integrations: XAI_PAGES,
        params: &[ParamSpec::required("url", "Onboarding page URL").url()],
        estimated_seconds: 25,
    },
    ToolDescriptor {
        name: "form-cro",
        description: "Form field and layout optimization",
        long_help: "Review field count, labels, validation, layout, and multi-step potential.",
        aliases: &["form"],
        examples: &["cro:form-cro url:https://example.com/contact"],
        integrations: XAI_PAGES,
        params: &[ParamSpec::required("url", "Page URL containing the form").url()],
        estimated_seconds: 25,
    },
    ToolDescriptor {
        name: "popup-cro",
        description: "Popup and modal effectiveness review",
        long_help: "Review popup timing, targeting, copy, exit-intent, and frequency.",
        aliases: &["popup"],
        examples: &["cro:popup-cro url:https://example.com"],
        integrations: XAI_PAGES,
        params: &[ParamSpec::required("url", "Page URL to analyze for popups").url()],
        estimated_seconds: 25,
    },
    ToolDescriptor {
        name: "paywall-upgrade",
        description: "Upgrade and paywall screen review",
        long_help: "Review pricing clarity, feature comparison, urgency elements, and objection handling.",
        aliases: &["paywall", "upsell"],
        examples: &["cro:paywall-upgrade url:https://example.com/upgrade"],
        integrations: XAI_PAGES,
        params: &[ParamSpec::required("url", "Upgrade/paywall page URL").url()],
        estimated_seconds: 25,
    },
    ToolDescriptor {
        name: "churn-prevention",
        description: "Cancel flow and retention review",
        long_help: "Review retention hooks, exit surveys, save offers, and win-back potential.",
        aliases: &["churn", "cancel"],
        examples: &["cro:churn-prevention url:https://example.com/account/cancel"],
        integrations: XAI_PAGES,
        params: &[ParamSpec::required("url", "Cancel/churn page URL").url()],
        estimated_seconds: 25,
    },
    ToolDescriptor {
        name: "free-tool-strategy",
        description: "Free tool ideas for lead generation",
        long_help: "Plan free tools for lead generation with an effort/impact matrix, \
                    tech stack suggestions, and a distribution plan.",
        aliases: &["free-tool"],
        examples: &["cro:free-tool-strategy industry:\"SaaS\" goal:\"email signups\""],
        integrations: XAI,
        params: &[
            ParamSpec::required("industry", "Your industry/niche"),
            ParamSpec::optional("goal", "Lead gen goal").default("email signups"),
        ],
        estimated_seconds: 15,
    },
];

const SEO_TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "audit",
        description: "Technical and on-page SEO audit",
        long_help: "Extract meta tags, headings, and structured data from a page and report \
                    what is missing. Adds AI recommendations unless depth is shallow.",
        aliases: &["check"],
        examples: &[
            "seo:audit url:https://example.com",
            "seo:check url:https://example.com/blog depth:shallow",
        ],
        integrations: XAI_PAGES,
        params: &[
            ParamSpec::required("url", "URL to audit").url(),
            ParamSpec::optional("depth", "Audit depth")
                .default("standard")
                .options(&["shallow", "standard", "deep"]),
        ],
        estimated_seconds: 20,
    },
    ToolDescriptor {
        name: "programmatic",
        description: "Programmatic SEO page templates",
        long_help: "Design a programmatic SEO page template with keyword mapping, meta tag \
                    templates, and internal linking.",
        aliases: &["pSEO"],
        examples: &["seo:programmatic template:\"integration pages\" keyword-pattern:\"{tool} integration\""],
        integrations: XAI,
        params: &[
            ParamSpec::required("template", "Type of page template"),
            ParamSpec::optional("keyword-pattern", "Keyword pattern with variables"),
            ParamSpec::optional("count", "Number of example pages to generate").default("5"),
        ],
        estimated_seconds: 20,
    },
    ToolDescriptor {
        name: "ai-seo",
        description: "Optimize for AI search engines",
        long_help: "Answer Engine Optimization (AEO) and LLM Optimization (LLMO) for Google AI \
                    Overview, ChatGPT, and Perplexity.",
        aliases: &["aeo", "llmo"],
        examples: &[
            "seo:ai-seo topic:\"best CRM for startups\" format:faq",
            "seo:aeo url:https://example.com/guide",
        ],
        integrations: XAI_PAGES,
        params: &[
            ParamSpec::optional("topic", "Topic to optimize for AI search"),
            ParamSpec::optional("url", "URL to analyze for AI search optimization").url(),
            ParamSpec::optional("format", "Content format")
                .default("recommendations")
                .options(&["recommendations", "faq", "structured"]),
        ],
        estimated_seconds: 20,
    },
    ToolDescriptor {
        name: "schema-markup",
        description: "Generate or validate JSON-LD schema",
        long_help: "Generate schema.org JSON-LD for a type, or validate the structured data \
                    already present on a page.",
        aliases: &["schema", "jsonld"],
        examples: &[
            "seo:schema-markup type:Organization name:\"Acme\"",
            "seo:schema url:https://example.com action:validate",
        ],
        integrations: XAI_PAGES,
        params: &[
            ParamSpec::optional("url", "URL to analyze for existing schema").url(),
            ParamSpec::optional("action", "Action to perform")
                .default("generate")
                .options(&["generate", "validate"]),
            ParamSpec::optional("type", "Schema type to generate").options(&[
                "Organization",
                "Product",
                "FAQ",
                "Article",
                "SoftwareApplication",
                "WebSite",
            ]),
            ParamSpec::optional("name", "Entity name for schema generation"),
        ],
        estimated_seconds: 15,
    },
    ToolDescriptor {
        name: "competitor-alternatives",
        description: "Competitor comparison and alternatives pages",
        long_help: "Create \"alternatives to\" and comparison content with tables, \
                    differentiators, and target keywords.",
        aliases: &["competitors", "vs"],
        examples: &[
            "seo:competitor-alternatives competitors:\"Notion,Coda\" product:\"Acme Docs\"",
            "seo:vs url:https://competitor.example.com",
        ],
        integrations: XAI_PAGES,
        params: &[
            ParamSpec::optional("url", "Competitor URL to analyze").url(),
            ParamSpec::optional("competitors", "Comma-separated competitor names"),
            ParamSpec::optional("product", "Your product name for comparison"),
        ],
        estimated_seconds: 25,
    },
];

const ADS_TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "paid-ads",
        description: "Paid campaign strategy",
        long_help: "Design a paid ads campaign: structure, ad groups, targeting, bidding, \
                    creative guidelines, budget allocation, and KPIs.",
        aliases: &["campaign", "ppc"],
        examples: &[
            "ads:paid-ads platform:google product:\"CRM\" budget:5000",
            "ads:ppc platform:meta goal:signups audience:\"founders\"",
        ],
        integrations: XAI,
        params: &[
            ParamSpec::required("platform", "Ad platform")
                .options(&["google", "meta", "linkedin", "tiktok", "all"]),
            ParamSpec::optional("product", "Product to advertise"),
            ParamSpec::optional("budget", "Monthly budget in USD"),
            ParamSpec::optional("goal", "Campaign goal")
                .default("conversions")
                .options(&["awareness", "traffic", "signups", "conversions", "revenue"]),
            ParamSpec::optional("audience", "Target audience description"),
        ],
        estimated_seconds: 20,
    },
    ToolDescriptor {
        name: "ab-test",
        description: "A/B test experiment design",
        long_help: "Design an experiment: hypothesis, variants, sample size, duration, and analysis plan.",
        aliases: &["experiment", "split-test"],
        examples: &[
            "ads:ab-test page:pricing element:\"CTA copy\"",
            "ads:experiment hypothesis:\"Social proof above the fold lifts signups\" variants:3",
        ],
        integrations: XAI,
        params: &[
            ParamSpec::optional("page", "Page or feature to test"),
            ParamSpec::optional("element", "Specific element to test"),
            ParamSpec::optional("hypothesis", "Test hypothesis"),
            ParamSpec::optional("variants", "Number of variants").default("2"),
            ParamSpec::optional("metric", "Primary success metric").default("conversion-rate"),
        ],
        estimated_seconds: 15,
    },
    ToolDescriptor {
        name: "analytics-tracking",
        description: "Analytics tracking plan",
        long_help: "Design an event tracking plan with names, parameters, triggers, UTM \
                    conventions, and implementation snippets.",
        aliases: &["tracking", "ga4"],
        examples: &[
            "ads:analytics-tracking scope:\"signup funnel\" platform:ga4",
            "ads:tracking scope:checkout events:ecommerce",
        ],
        integrations: XAI,
        params: &[
            ParamSpec::required("scope", "What to track"),
            ParamSpec::optional("platform", "Analytics platform")
                .default("ga4")
                .options(&["ga4", "mixpanel", "amplitude", "posthog"]),
            ParamSpec::optional("events", "Event type focus")
                .default("recommended")
                .options(&["recommended", "custom", "ecommerce", "all"]),
        ],
        estimated_seconds: 20,
    },
];

const X_TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "summarise",
        description: "Summarise a URL with AI and post it to X",
        long_help: "Fetch the page, write a post of at most 280 characters with XAI/Grok, \
                    and publish it with the URL appended.",
        aliases: &["summarize"],
        examples: &["x:summarise url:https://example.com/article"],
        integrations: POSTING,
        params: &[
            ParamSpec::required("url", "Page to summarise").url(),
            ParamSpec::optional("dry-run", "Preview without posting")
                .default("false")
                .options(BOOL),
        ],
        estimated_seconds: 15,
    },
    ToolDescriptor {
        name: "post",
        description: "Post content directly to X",
        long_help: "Post the given content, optionally followed by a URL.",
        aliases: &[],
        examples: &["x:post content:\"Check this out!\" url:https://example.com"],
        integrations: ARCADE,
        params: &[
            ParamSpec::optional("content", "Text content to post"),
            ParamSpec::optional("url", "URL to include in the post").url(),
            ParamSpec::optional("dry-run", "Preview without posting")
                .default("false")
                .options(BOOL),
        ],
        estimated_seconds: 5,
    },
    ToolDescriptor {
        name: "preview",
        description: "Preview the AI summary without posting",
        long_help: "Fetch the page and show the post that summarise would publish.",
        aliases: &[],
        examples: &["x:preview url:https://example.com"],
        integrations: XAI_PAGES,
        params: &[ParamSpec::required("url", "Page to summarise").url()],
        estimated_seconds: 10,
    },
];

const LINKEDIN_TOOLS: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "summarise",
        description: "Summarise a URL with AI and post it to LinkedIn",
        long_help: "Fetch the page, write a 2-3 paragraph professional post with XAI/Grok, \
                    and publish it with a \"Learn more\" link.",
        aliases: &["summarize"],
        examples: &["linkedin:summarise url:https://example.com/article"],
        integrations: POSTING,
        params: &[
            ParamSpec::required("url", "Page to summarise").url(),
            ParamSpec::optional("dry-run", "Preview without posting")
                .default("false")
                .options(BOOL),
        ],
        estimated_seconds: 15,
    },
    ToolDescriptor {
        name: "post",
        description: "Post content directly to LinkedIn",
        long_help: "Post the given content, optionally followed by a \"Learn more\" link.",
        aliases: &[],
        examples: &["linkedin:post content:\"We are hiring!\" url:https://example.com/jobs"],
        integrations: ARCADE,
        params: &[
            ParamSpec::optional("content", "Text content to post"),
            ParamSpec::optional("url", "URL to include in the post").url(),
            ParamSpec::optional("dry-run", "Preview without posting")
                .default("false")
                .options(BOOL),
        ],
        estimated_seconds: 5,
    },
    ToolDescriptor {
        name: "preview",
        description: "Preview the AI summary without posting",
        long_help: "Fetch the page and show the post that summarise would publish.",
        aliases: &[],
        examples: &["linkedin:preview url:https://example.com"],
        integrations: XAI_PAGES,
        params: &[ParamSpec::required("url", "Page to summarise").url()],
        estimated_seconds: 10,
    },
];
