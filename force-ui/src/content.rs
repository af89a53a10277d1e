//! Marketing copy for the landing page.

pub struct Hero {
    pub headline: &'static str,
    pub tagline: &'static str,
    pub footnote: &'static str,
}

pub const HERO: Hero = Hero {
    headline: "Empower Your Business with Seamless Data Analytics",
    tagline: "Connect, Transform, and Visualize Data from Salesforce and External Sources \
              – All in One Platform.",
    footnote: "No credit card required for free trial",
};

pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES_HEADING: &str = "Powerful Features for Your Data Needs";
pub const FEATURES_INTRO: &str = "Force Analytics provides all the tools you need to make sense \
                                  of your Salesforce data and beyond.";

pub const FEATURES: [Feature; 4] = [
    Feature {
        title: "Connect to Salesforce and Multiple External Data Sources",
        description: "Easily integrate with your Salesforce instance and connect to various \
                      external data sources including SQL databases, CSV files, and \
                      third-party services.",
    },
    Feature {
        title: "Transform and Model Your Data Effortlessly",
        description: "Clean, transform, and model your data with our intuitive visual \
                      interface or use SQL for more advanced manipulations. No coding \
                      experience required.",
    },
    Feature {
        title: "Create Insightful Visualizations with Ease",
        description: "Build beautiful, interactive dashboards and reports that help you \
                      uncover insights and share them with your team. Choose from a variety \
                      of chart types and customize to your needs.",
    },
    Feature {
        title: "Supports SQL Query Books for Advanced Analytics",
        description: "Write and execute SQL queries directly on your data. Save and share \
                      your query books with team members for collaborative analysis and \
                      documentation.",
    },
];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub position: &'static str,
    pub company: &'static str,
}

impl Testimonial {
    /// Single-letter avatar placeholder.
    pub fn initial(&self) -> String {
        self.author.chars().next().map(String::from).unwrap_or_default()
    }
}

pub const TESTIMONIALS_HEADING: &str = "What Our Customers Say";
pub const TESTIMONIALS_INTRO: &str = "Thousands of companies use Force Analytics to get more \
                                      value from their Salesforce data.";

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Force Analytics has transformed how we analyze our Salesforce data. The \
                intuitive interface made it easy for our team to create meaningful dashboards \
                without any technical expertise.",
        author: "Sarah Johnson",
        position: "CRM Manager",
        company: "TechCorp Inc.",
    },
    Testimonial {
        quote: "We've been able to combine our Salesforce data with multiple other sources \
                seamlessly. The insights we've gained have directly contributed to a 27% \
                increase in our sales efficiency.",
        author: "Michael Chen",
        position: "VP of Sales",
        company: "Global Retail Solutions",
    },
    Testimonial {
        quote: "As a data analyst, I appreciate the SQL query books feature. It allows me to \
                perform complex analyses while maintaining documentation that my less \
                technical colleagues can understand.",
        author: "Alex Rodriguez",
        position: "Business Intelligence Analyst",
        company: "Finance Partners LLC",
    },
];

pub const CTA_HEADING: &str = "Ready to Transform Your Data Analytics?";
pub const CTA_BODY: &str = "Start your free trial today and discover how Force Analytics can \
                            help you make better decisions with your Salesforce data.";
