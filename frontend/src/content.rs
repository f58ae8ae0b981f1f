//! Per-language copy for the deck, resolved with [`content`].

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    En,
    Ar,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn dir(self) -> &'static str {
        match self {
            Language::En => "ltr",
            Language::Ar => "rtl",
        }
    }

    /// Attributes set on `<html>` so the browser lays the page out for this
    /// language.
    pub fn root_attributes(self) -> [(&'static str, &'static str); 2] {
        [("dir", self.dir()), ("lang", self.code())]
    }
}

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub is_new: bool,
}

pub struct PlayerCopy {
    pub now_playing: &'static str,
    pub close: &'static str,
    pub progress: &'static str,
    pub rewind: &'static str,
    pub forward: &'static str,
    pub play: &'static str,
    pub pause: &'static str,
    pub mute: &'static str,
    pub unmute: &'static str,
    pub volume: &'static str,
}

pub struct ConsentCopy {
    pub title: &'static str,
    pub message: &'static str,
    pub accept: &'static str,
}

pub struct FinancialsCopy {
    pub title: &'static str,
    pub back: &'static str,
    pub subtitle: &'static str,
    pub agent_growth: &'static str,
    pub revenue_growth: &'static str,
    pub final_roi: &'static str,
    pub final_roi_note: &'static str,
    pub profit_2030: &'static str,
    pub profit_2030_note: &'static str,
    pub chart_revenue_vs_expenses: &'static str,
    pub chart_revenue_streams: &'static str,
    pub chart_agent_growth: &'static str,
    pub chart_roi: &'static str,
    pub y_axis_amount: &'static str,
    pub y_axis_roi: &'static str,
    pub legend_profit: &'static str,
    pub legend_global_revenue: &'static str,
    pub legend_agent_revenue: &'static str,
    pub legend_other_revenue: &'static str,
    pub legend_expenses: &'static str,
    pub legend_agents: &'static str,
    pub legend_net_roi: &'static str,
    pub table_title: &'static str,
    pub table_headers: [&'static str; 9],
    pub note_title: &'static str,
    pub note_body: &'static str,
}

pub struct RiskRow {
    pub category: &'static str,
    pub desc: &'static str,
    pub likelihood: RiskLevel,
    pub impact: RiskLevel,
    pub mitigation: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

pub struct CaseStudyCopy {
    pub title: &'static str,
    pub back: &'static str,
    pub subtitle: &'static str,
    pub exec_summary_title: &'static str,
    pub exec_summary_body: &'static str,
    pub metric_market: &'static str,
    pub metric_revenue: &'static str,
    pub metric_ask: &'static str,
    pub metric_roi: &'static str,
    pub funds_title: &'static str,
    pub risk_title: &'static str,
    pub risk_headers: [&'static str; 5],
    pub risk_levels: [&'static str; 3],
    pub risks: &'static [RiskRow],
    pub conclusion_title: &'static str,
    pub conclusion_body: &'static str,
    pub cta: &'static str,
}

pub struct Content {
    pub nav: &'static [(&'static str, &'static str)],
    pub print: &'static str,
    pub podcast: &'static str,
    pub case_study: &'static str,
    pub contact_us: &'static str,
    pub schedule_meeting: &'static str,
    pub toggle_menu: &'static str,

    pub hero_pre_title: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,

    pub about_title: &'static str,
    pub about_subtitle: &'static str,

    pub features_title: &'static str,
    pub new_feature: &'static str,
    pub features: &'static [Feature],

    pub projections_title: &'static str,
    pub projections_subtitle: &'static str,
    pub year_labels: [&'static str; 3],
    pub projected_revenue: &'static str,
    pub active_customers: &'static str,
    pub monthly_orders: &'static str,
    pub gross_margin: &'static str,
    pub virtual_shelves: &'static str,
    pub partners: &'static str,
    pub chart_months_label: &'static str,
    pub chart_revenue_label: &'static str,
    pub view_financials: &'static str,

    pub market_title: &'static str,
    pub market_subtitle: &'static str,
    pub market_stat_labels: [&'static str; 4],

    pub investment_pre_title: &'static str,
    pub investment_title: &'static str,
    pub investment_subtitle: &'static str,
    pub round_details: &'static str,
    pub seeking: &'static str,
    pub valuation: &'static str,
    pub pre_money: &'static str,
    pub equity_offered: &'static str,
    pub min_investment: &'static str,
    pub use_of_funds: &'static str,
    pub use_of_funds_items: [(&'static str, &'static str); 3],

    pub cta_title: &'static str,
    pub cta_subtitle: &'static str,
    pub footer_text: &'static str,

    pub consent: ConsentCopy,
    pub player: PlayerCopy,
    pub financials: FinancialsCopy,
    pub case_study_page: CaseStudyCopy,
}

pub fn content(language: Language) -> &'static Content {
    match language {
        Language::En => &EN,
        Language::Ar => &AR,
    }
}

static EN: Content = Content {
    nav: &[
        ("About", "#about"),
        ("Features", "#features"),
        ("Projections", "#projections"),
        ("Market", "#market"),
        ("Investment", "#investment"),
    ],
    print: "Print",
    podcast: "Podcast",
    case_study: "Business Case Study",
    contact_us: "Contact Us",
    schedule_meeting: "Schedule a Meeting",
    toggle_menu: "Toggle menu",

    hero_pre_title: "Series A Investment Opportunity",
    hero_title: "Revolutionizing the UAE's Automotive Parts Market & Shipping Globally",
    hero_subtitle: "Part2Car.ae is the region's first comprehensive B2B automotive parts marketplace, connecting suppliers, workshops, and retailers through innovative technology.",

    about_title: "About Part2Car.ae",
    about_subtitle: "The first AI-powered automotive parts marketplace in the GCC, connecting repair shops with verified suppliers through intelligent automation.",

    features_title: "Core Features",
    new_feature: "In progress",
    features: &[
        Feature { icon: "🤖", title: "AI-Powered Search", desc: "Advanced AI chatbot helps customers find the right part in seconds, not hours.", is_new: true },
        Feature { icon: "⚡️", title: "Instant Quotes", desc: "Real-time pricing from multiple suppliers with transparent comparison.", is_new: false },
        Feature { icon: "🛠️", title: "Partners & Vendors AI Toolkit", desc: "ML-driven inventory management and dynamic pricing to optimize stock and maximize profits.", is_new: true },
        Feature { icon: "📊", title: "Datametra (RAG)", desc: "In-house RAG AI helping vendors, partners, and users understand their data.", is_new: false },
        Feature { icon: "🔗", title: "Instagram Sync", desc: "Vendors publish once on Instagram, and their parts are automatically updated on Part2Car.", is_new: true },
        Feature { icon: "🏪", title: "Vendor Storefronts", desc: "Dedicated vendor pages with full contact details to enhance brand visibility and direct communication.", is_new: false },
    ],

    projections_title: "3-Year Growth Projections",
    projections_subtitle: "Ambitious yet achievable targets backed by market validation and operational excellence",
    year_labels: ["Year 1", "Year 2", "Year 3"],
    projected_revenue: "Projected Revenue",
    active_customers: "Active Customers",
    monthly_orders: "Monthly Orders",
    gross_margin: "Gross Margin",
    virtual_shelves: "Virtual Shelves Occupied",
    partners: "Partners",
    chart_months_label: "Months",
    chart_revenue_label: "Projected Revenue",
    view_financials: "View 5-Year Detailed Projections",

    market_title: "Massive Market Opportunity",
    market_subtitle: "Capturing share in a rapidly growing, under-digitized market",
    market_stat_labels: [
        "UAE Automotive Aftermarket",
        "GCC Market Size",
        "Projected CAGR",
        "Digital Penetration",
    ],

    investment_pre_title: "Series A",
    investment_title: "Investment Opportunity",
    investment_subtitle: "Series A round to accelerate growth and regional expansion",
    round_details: "Round Details",
    seeking: "Seeking:",
    valuation: "Valuation:",
    pre_money: "(Pre-money)",
    equity_offered: "Equity Offered:",
    min_investment: "Min. Investment:",
    use_of_funds: "Use of Funds",
    use_of_funds_items: [
        ("Technology & Product", "AI/ML capabilities, mobile apps, and API infrastructure"),
        ("Market Expansion", "GCC expansion and new city launches"),
        ("Operations & Logistics", "Warehouses, delivery fleet, and team growth"),
    ],

    cta_title: "Ready to Transform the Industry?",
    cta_subtitle: "Join us in building the future of automotive commerce in the Middle East",
    footer_text: "All Rights Reserved.",

    consent: ConsentCopy {
        title: "🧐 Just Checking...",
        message: "We use cookies to ensure this pitch deck is as revolutionary as our business model. By clicking below, you're confirming you have an eye for billion-dollar opportunities. Are you in?",
        accept: "I'm a Visionary Investor",
    },
    player: PlayerCopy {
        now_playing: "Now Playing",
        close: "Close player",
        progress: "Audio progress",
        rewind: "Rewind 10 seconds",
        forward: "Fast-forward 10 seconds",
        play: "Play",
        pause: "Pause",
        mute: "Mute",
        unmute: "Unmute",
        volume: "Volume",
    },
    financials: FinancialsCopy {
        title: "Financial Projections",
        back: "← Back to Pitch Deck",
        subtitle: "5-Year Growth Strategy (2026-2030)",
        agent_growth: "Agent Growth",
        revenue_growth: "Global Revenue Growth",
        final_roi: "Final ROI",
        final_roi_note: "From -1% in 2026",
        profit_2030: "2030 Profit",
        profit_2030_note: "Net profit margin",
        chart_revenue_vs_expenses: "Global Revenue vs Expenses",
        chart_revenue_streams: "Revenue Streams Breakdown",
        chart_agent_growth: "Agent Growth",
        chart_roi: "ROI Progression",
        y_axis_amount: "Amount",
        y_axis_roi: "ROI (%)",
        legend_profit: "Profit",
        legend_global_revenue: "Global Revenue",
        legend_agent_revenue: "Agent Revenue",
        legend_other_revenue: "Other Revenue",
        legend_expenses: "Expenses",
        legend_agents: "Agents",
        legend_net_roi: "Net ROI",
        table_title: "Detailed Projections",
        table_headers: [
            "Year",
            "Agents",
            "Agent Revenue",
            "Other Revenue",
            "Global Revenue",
            "Expenses",
            "Profit",
            "Gross Margin",
            "ROI",
        ],
        note_title: "Note:",
        note_body: "Agent revenue represents royalty fees per agent per year. Other revenue streams include additional business activities with consistent year-over-year growth.",
    },
    case_study_page: CaseStudyCopy {
        title: "Business Case Study: The Investment Thesis for Part2Car.ae",
        back: "← Back to Pitch Deck",
        subtitle: "A deep dive into a high-growth, technology-driven venture poised to dominate the $12B GCC automotive aftermarket.",
        exec_summary_title: "Executive Summary",
        exec_summary_body: "Part2Car.ae presents a compelling, time-sensitive investment opportunity to digitize and dominate the fragmented, inefficient, and rapidly growing GCC automotive parts aftermarket.",
        metric_market: "Target Market (GCC)",
        metric_revenue: "Projected Y3 Revenue",
        metric_ask: "Series A Ask",
        metric_roi: "Projected 5Y ROI",
        funds_title: "Investment Ask & Use of Funds",
        risk_title: "Risk Analysis & Mitigation Strategy",
        risk_headers: ["Risk Category", "Description", "Likelihood", "Impact", "Mitigation Strategy"],
        risk_levels: ["Low", "Medium", "High"],
        risks: &[
            RiskRow { category: "Market Adoption", desc: "Slow adoption by traditional, less tech-savvy workshops.", likelihood: RiskLevel::Medium, impact: RiskLevel::Medium, mitigation: "Dedicated onboarding teams, simple interfaces and early-adopter incentives." },
            RiskRow { category: "Competition", desc: "A well-funded competitor or a reaction from large incumbents.", likelihood: RiskLevel::Medium, impact: RiskLevel::High, mitigation: "Build network effects quickly and lock in key suppliers with exclusive terms." },
            RiskRow { category: "Operational", desc: "Logistics and execution challenges in new markets.", likelihood: RiskLevel::High, impact: RiskLevel::Medium, mitigation: "Hybrid logistics model combining an own fleet with third-party partners." },
            RiskRow { category: "Execution", desc: "Missing key roadmap milestones due to internal factors.", likelihood: RiskLevel::Low, impact: RiskLevel::High, mitigation: "Experienced leadership team, agile delivery and clear KPIs." },
        ],
        conclusion_title: "Conclusion: An Unparalleled Opportunity",
        conclusion_body: "Part2Car.ae is at the inflection point of technology and market need. We are not just building a company; we are creating the digital infrastructure for an entire industry.",
        cta: "Schedule a Private Briefing",
    },
};

static AR: Content = Content {
    nav: &[
        ("نبذة عنا", "#about"),
        ("الميزات", "#features"),
        ("التوقعات", "#projections"),
        ("السوق", "#market"),
        ("الاستثمار", "#investment"),
    ],
    print: "طباعة",
    podcast: "بودكاست",
    case_study: "دراسة حالة العمل",
    contact_us: "اتصل بنا",
    schedule_meeting: "حدد اجتماعًا",
    toggle_menu: "تبديل القائمة",

    hero_pre_title: "فرصة استثمارية (الفئة أ)",
    hero_title: "ثورة في سوق قطع غيار السيارات في الإمارات، مع الشحن العالمي",
    hero_subtitle: "Part2Car.ae هي أول سوق شامل لقطع غيار السيارات بين الشركات في المنطقة، وتربط الموردين وورش العمل وتجار التجزئة من خلال التكنولوجيا المبتكرة.",

    about_title: "عن Part2Car.ae",
    about_subtitle: "أول سوق لقطع غيار السيارات مدعوم بالذكاء الاصطناعي في دول مجلس التعاون الخليجي، يربط ورش التصليح بالموردين المعتمدين من خلال الأتمتة الذكية.",

    features_title: "الميزات الأساسية",
    new_feature: "قيد التنفيذ",
    features: &[
        Feature { icon: "🤖", title: "بحث مدعوم بالذكاء الاصطناعي", desc: "يساعد روبوت الدردشة المتقدم العملاء في العثور على القطعة المناسبة في ثوانٍ، وليس ساعات.", is_new: true },
        Feature { icon: "⚡️", title: "عروض أسعار فورية", desc: "أسعار فورية من موردين متعددين مع مقارنة شفافة.", is_new: false },
        Feature { icon: "🛠️", title: "مجموعة أدوات الذكاء الاصطناعي للشركاء والبائعين", desc: "إدارة مخزون تعتمد على التعلم الآلي وتسعير ديناميكي لتحسين المخزون وزيادة الأرباح.", is_new: true },
        Feature { icon: "📊", title: "داتامترا (RAG)", desc: "ذكاء اصطناعي (RAG) داخلي يساعد البائعين والشركاء والمستخدمين على فهم بياناتهم.", is_new: false },
        Feature { icon: "🔗", title: "مزامنة مع انستغرام", desc: "ينشر البائعون مرة واحدة على انستغرام، ويتم تحديث قطعهم تلقائيًا على Part2Car.", is_new: true },
        Feature { icon: "🏪", title: "واجهات متاجر البائعين", desc: "صفحات مخصصة للبائعين مع تفاصيل اتصال كاملة لتعزيز رؤية العلامة التجارية والتواصل المباشر.", is_new: false },
    ],

    projections_title: "توقعات النمو لمدة 3 سنوات",
    projections_subtitle: "أهداف طموحة ولكنها قابلة للتحقيق مدعومة بالتحقق من السوق والتميز التشغيلي",
    year_labels: ["السنة الأولى", "السنة الثانية", "السنة الثالثة"],
    projected_revenue: "الإيرادات المتوقعة",
    active_customers: "العملاء النشطون",
    monthly_orders: "الطلبات الشهرية",
    gross_margin: "هامش الربح الإجمالي",
    virtual_shelves: "الرفوف الافتراضية المشغولة",
    partners: "الشركاء",
    chart_months_label: "أشهر",
    chart_revenue_label: "الإيرادات المتوقعة",
    view_financials: "عرض التوقعات التفصيلية لمدة 5 سنوات",

    market_title: "فرصة سوقية هائلة",
    market_subtitle: "الاستحواذ على حصة في سوق ينمو بسرعة ويعاني من نقص الرقمنة",
    market_stat_labels: [
        "سوق ما بعد البيع للسيارات في الإمارات",
        "حجم سوق دول مجلس التعاون الخليجي",
        "معدل النمو السنوي المركب المتوقع",
        "الاختراق الرقمي",
    ],

    investment_pre_title: "الفئة أ",
    investment_title: "فرصة استثمارية",
    investment_subtitle: "جولة استثمارية (الفئة أ) لتسريع النمو والتوسع الإقليمي",
    round_details: "تفاصيل الجولة",
    seeking: "المبلغ المطلوب:",
    valuation: "التقييم:",
    pre_money: "(قبل الاستثمار)",
    equity_offered: "الحصة المعروضة:",
    min_investment: "الحد الأدنى للاستثمار:",
    use_of_funds: "استخدام الأموال",
    use_of_funds_items: [
        ("التكنولوجيا والمنتج", "قدرات الذكاء الاصطناعي/التعلم الآلي، تطبيقات الجوال، والبنية التحتية لـ API"),
        ("توسيع السوق", "التوسع في دول مجلس التعاون الخليجي وإطلاق مدن جديدة"),
        ("العمليات والخدمات اللوجستية", "المستودعات، أسطول التوصيل، ونمو الفريق"),
    ],

    cta_title: "هل أنت مستعد لتغيير الصناعة؟",
    cta_subtitle: "انضم إلينا في بناء مستقبل تجارة السيارات في الشرق الأوسط",
    footer_text: "جميع الحقوق محفوظة.",

    consent: ConsentCopy {
        title: "🧐 لحظة من فضلك...",
        message: "نحن نستخدم ملفات تعريف الارتباط (الكوكيز) لنتأكد من أن هذا العرض التقديمي ثوري مثل نموذج عملنا. بالنقر أدناه، فأنت تؤكد أن لديك نظرة ثاقبة للفرص المليارية. هل أنت معنا؟",
        accept: "أنا مستثمر صاحب رؤية",
    },
    player: PlayerCopy {
        now_playing: "قيد التشغيل الآن",
        close: "إغلاق المشغل",
        progress: "تقدم الصوت",
        rewind: "الرجوع 10 ثوانٍ",
        forward: "التقديم 10 ثوانٍ",
        play: "تشغيل",
        pause: "إيقاف مؤقت",
        mute: "كتم الصوت",
        unmute: "إلغاء كتم الصوت",
        volume: "مستوى الصوت",
    },
    financials: FinancialsCopy {
        title: "التوقعات المالية",
        back: "العودة إلى العرض التقديمي →",
        subtitle: "استراتيجية النمو لمدة 5 سنوات (2026-2030)",
        agent_growth: "نمو الوكلاء",
        revenue_growth: "نمو الإيرادات العالمية",
        final_roi: "العائد على الاستثمار النهائي",
        final_roi_note: "من -1% في 2026",
        profit_2030: "أرباح 2030",
        profit_2030_note: "هامش الربح الصافي",
        chart_revenue_vs_expenses: "الإيرادات العالمية مقابل النفقات",
        chart_revenue_streams: "تفصيل مصادر الإيرادات",
        chart_agent_growth: "نمو الوكلاء",
        chart_roi: "تطور العائد على الاستثمار",
        y_axis_amount: "المبلغ",
        y_axis_roi: "العائد (%)",
        legend_profit: "الربح",
        legend_global_revenue: "الإيرادات العالمية",
        legend_agent_revenue: "إيرادات الوكلاء",
        legend_other_revenue: "إيرادات أخرى",
        legend_expenses: "النفقات",
        legend_agents: "الوكلاء",
        legend_net_roi: "صافي العائد على الاستثمار",
        table_title: "التوقعات التفصيلية",
        table_headers: [
            "السنة",
            "الوكلاء",
            "إيرادات الوكلاء",
            "إيرادات أخرى",
            "الإيرادات العالمية",
            "النفقات",
            "الربح",
            "هامش الربح الإجمالي",
            "العائد على الاستثمار",
        ],
        note_title: "ملاحظة:",
        note_body: "تمثل إيرادات الوكلاء رسوم الامتياز لكل وكيل سنويًا. تشمل مصادر الإيرادات الأخرى أنشطة تجارية إضافية مع نمو سنوي ثابت.",
    },
    case_study_page: CaseStudyCopy {
        title: "دراسة حالة العمل: الأطروحة الاستثمارية لـ Part2Car.ae",
        back: "→ العودة إلى العرض التقديمي",
        subtitle: "نظرة متعمقة على مشروع قائم على التكنولوجيا وعالي النمو، يستعد للسيطرة على سوق ما بعد البيع للسيارات في دول مجلس التعاون الخليجي.",
        exec_summary_title: "ملخص تنفيذي",
        exec_summary_body: "تقدم Part2Car.ae فرصة استثمارية جذابة وحساسة للوقت لرقمنة والسيطرة على سوق قطع غيار السيارات المجزأ وغير الفعال وسريع النمو في دول مجلس التعاون الخليجي.",
        metric_market: "السوق المستهدف (الخليج)",
        metric_revenue: "الإيرادات المتوقعة للسنة الثالثة",
        metric_ask: "طلب الجولة (الفئة أ)",
        metric_roi: "العائد المتوقع لخمس سنوات",
        funds_title: "الطلب الاستثماري واستخدام الأموال",
        risk_title: "تحليل المخاطر واستراتيجية التخفيف",
        risk_headers: ["فئة المخاطر", "الوصف", "الاحتمالية", "التأثير", "استراتيجية التخفيف"],
        risk_levels: ["منخفض", "متوسط", "مرتفع"],
        risks: &[
            RiskRow { category: "تبني السوق", desc: "تباطؤ في تبني الحل من قبل ورش العمل التقليدية وغير المتمرسة تقنيًا.", likelihood: RiskLevel::Medium, impact: RiskLevel::Medium, mitigation: "فرق تأهيل مخصصة وواجهات بسيطة وحوافز للمتبنين الأوائل." },
            RiskRow { category: "المنافسة", desc: "ظهور منافس ممول جيدًا أو رد فعل من الشركات الكبرى القائمة.", likelihood: RiskLevel::Medium, impact: RiskLevel::High, mitigation: "بناء تأثيرات الشبكة بسرعة وتأمين الموردين الرئيسيين بشروط حصرية." },
            RiskRow { category: "التشغيل", desc: "تحديات لوجستية وتنفيذية في الأسواق الجديدة.", likelihood: RiskLevel::High, impact: RiskLevel::Medium, mitigation: "نموذج لوجستي هجين (أسطول خاص + شركاء خارجيون)." },
            RiskRow { category: "التنفيذ", desc: "الفشل في تحقيق المعالم الرئيسية في خارطة الطريق بسبب عوامل داخلية.", likelihood: RiskLevel::Low, impact: RiskLevel::High, mitigation: "فريق قيادي متمرس وتسليم مرن ومؤشرات أداء واضحة." },
        ],
        conclusion_title: "الخاتمة: فرصة لا مثيل لها",
        conclusion_body: "تقف Part2Car.ae عند نقطة التقاء التكنولوجيا وحاجة السوق. نحن لا نبني شركة فحسب؛ بل ننشئ البنية التحتية الرقمية لصناعة بأكملها.",
        cta: "حدد موعدًا لجلسة إحاطة خاصة",
    },
};

impl RiskLevel {
    pub fn label(self, copy: &CaseStudyCopy) -> &'static str {
        match self {
            RiskLevel::Low => copy.risk_levels[0],
            RiskLevel::Medium => copy.risk_levels[1],
            RiskLevel::High => copy.risk_levels[2],
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            RiskLevel::Low => "risk-low",
            RiskLevel::Medium => "risk-medium",
            RiskLevel::High => "risk-high",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_line_up() {
        let en = content(Language::En);
        let ar = content(Language::Ar);
        assert_eq!(en.nav.len(), ar.nav.len());
        assert_eq!(en.features.len(), ar.features.len());
        assert_eq!(en.case_study_page.risks.len(), ar.case_study_page.risks.len());
        for ((_, en_href), (_, ar_href)) in en.nav.iter().zip(ar.nav.iter()) {
            assert_eq!(en_href, ar_href);
        }
    }

    #[test]
    fn direction_follows_language() {
        assert_eq!(Language::En.dir(), "ltr");
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::Ar.code(), "ar");
    }

    #[test]
    fn root_attributes_carry_direction_and_language() {
        assert_eq!(Language::Ar.root_attributes(), [("dir", "rtl"), ("lang", "ar")]);
        assert_eq!(Language::En.root_attributes(), [("dir", "ltr"), ("lang", "en")]);
    }
}
