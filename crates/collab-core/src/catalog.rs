#![forbid(unsafe_code)]

//! Static student roster and project listing.
//!
//! The records are fixed at compile time and rendered once at startup. Nothing
//! adds, edits, or removes entries while the page is open.

/// One student profile card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Student {
    pub name: &'static str,
    pub role: &'static str,
    /// Comma-separated skill list, searched verbatim.
    pub skills: &'static str,
    pub college: &'static str,
    /// Initials shown in the avatar bubble.
    pub avatar: &'static str,
    pub rating: f32,
    /// Completed project count.
    pub projects: u32,
    pub bio: &'static str,
    pub location: &'static str,
    pub experience: &'static str,
}

impl Student {
    /// Fields the roster search matches against, in match order.
    #[must_use]
    pub const fn searchable_fields(&self) -> [&'static str; 3] {
        [self.name, self.skills, self.college]
    }
}

/// One project listing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Comma-separated skill list; rendered as individual chips.
    pub skills: &'static str,
    pub budget: &'static str,
    /// Category tag compared exactly by the category filter.
    pub category: &'static str,
    pub posted: &'static str,
    pub duration: &'static str,
    pub company: &'static str,
    pub location: &'static str,
}

impl Project {
    /// Individual skills, split the way the card renders them.
    pub fn skill_chips(&self) -> impl Iterator<Item = &'static str> {
        self.skills.split(", ")
    }
}

/// The student roster, in display order.
pub static STUDENTS: &[Student] = &[
    Student {
        name: "Arjun Patel",
        role: "Full Stack Developer",
        skills: "React, Node.js, MongoDB, AWS, Docker",
        college: "IIT Bombay",
        avatar: "AP",
        rating: 4.9,
        projects: 32,
        bio: "Passionate about building scalable web applications with modern technologies. Specialized in MERN stack development.",
        location: "Mumbai, India",
        experience: "3 years internship experience",
    },
    Student {
        name: "Priya Sharma",
        role: "Machine Learning Engineer",
        skills: "Python, TensorFlow, PyTorch, NLP, Computer Vision",
        college: "IIT Delhi",
        avatar: "PS",
        rating: 4.8,
        projects: 28,
        bio: "AI enthusiast with expertise in deep learning and neural networks. Published research in computer vision applications.",
        location: "Delhi, India",
        experience: "2 years research experience",
    },
    Student {
        name: "Rohan Mehta",
        role: "Mobile App Developer",
        skills: "Flutter, React Native, Kotlin, Swift, Firebase",
        college: "IIT Madras",
        avatar: "RM",
        rating: 4.7,
        projects: 25,
        bio: "Cross-platform mobile developer creating intuitive user experiences. Expert in performance optimization and native integrations.",
        location: "Chennai, India",
        experience: "2.5 years app development",
    },
    Student {
        name: "Ananya Singh",
        role: "UI/UX Designer",
        skills: "Figma, Adobe Creative Suite, User Research, Prototyping",
        college: "NID Ahmedabad",
        avatar: "AS",
        rating: 4.9,
        projects: 35,
        bio: "Design thinker focused on creating meaningful digital experiences. Specializes in user-centered design and accessibility.",
        location: "Ahmedabad, India",
        experience: "3 years design experience",
    },
    Student {
        name: "Vikram Kumar",
        role: "DevOps Engineer",
        skills: "AWS, Kubernetes, CI/CD, Terraform, Jenkins",
        college: "BITS Pilani",
        avatar: "VK",
        rating: 4.8,
        projects: 29,
        bio: "Infrastructure automation specialist with cloud architecture expertise. Passionate about scalable and secure deployments.",
        location: "Hyderabad, India",
        experience: "2 years DevOps experience",
    },
    Student {
        name: "Meera Desai",
        role: "Data Scientist",
        skills: "Python, R, SQL, Tableau, Statistical Analysis",
        college: "IISc Bangalore",
        avatar: "MD",
        rating: 4.9,
        projects: 22,
        bio: "Analytics professional with strong statistical foundation. Experienced in predictive modeling and business intelligence.",
        location: "Bangalore, India",
        experience: "1.5 years data science",
    },
    Student {
        name: "Karan Gupta",
        role: "Blockchain Developer",
        skills: "Solidity, Ethereum, Web3.js, Smart Contracts",
        college: "IIIT Hyderabad",
        avatar: "KG",
        rating: 4.7,
        projects: 18,
        bio: "Web3 enthusiast building decentralized applications. Expertise in smart contract development and blockchain security.",
        location: "Hyderabad, India",
        experience: "2 years blockchain development",
    },
    Student {
        name: "Sneha Reddy",
        role: "Cybersecurity Analyst",
        skills: "Network Security, Ethical Hacking, SIEM, Risk Assessment",
        college: "Jadavpur University",
        avatar: "SR",
        rating: 4.8,
        projects: 24,
        bio: "Security professional protecting digital assets. Specialized in penetration testing and vulnerability assessment.",
        location: "Kolkata, India",
        experience: "2 years cybersecurity",
    },
    Student {
        name: "Aditya Verma",
        role: "Game Developer",
        skills: "Unity, C#, Unreal Engine, 3D Modeling, VR/AR",
        college: "DITU, Greater Noida",
        avatar: "AV",
        rating: 4.6,
        projects: 20,
        bio: "Interactive entertainment creator passionate about immersive experiences. Expert in game mechanics and player engagement.",
        location: "Greater Noida, India",
        experience: "1.5 years game development",
    },
    Student {
        name: "Neha Joshi",
        role: "Product Manager",
        skills: "Agile, Scrum, Product Strategy, Market Research",
        college: "XLRI Jamshedpur",
        avatar: "NJ",
        rating: 4.9,
        projects: 30,
        bio: "Strategic product leader bridging technology and business needs. Experienced in launching successful digital products.",
        location: "Jamshedpur, India",
        experience: "3 years product management",
    },
    Student {
        name: "Rajesh Pillai",
        role: "Cloud Architect",
        skills: "Azure, Google Cloud, Microservices, Serverless, Architecture",
        college: "Anna University",
        avatar: "RP",
        rating: 4.8,
        projects: 26,
        bio: "Enterprise cloud solutions architect designing scalable infrastructure. Expert in multi-cloud strategies and cost optimization.",
        location: "Chennai, India",
        experience: "4 years cloud architecture",
    },
    Student {
        name: "Tanvi Shah",
        role: "Frontend Engineer",
        skills: "React, Vue.js, Angular, TypeScript, GraphQL",
        college: "DAIICT Gandhinagar",
        avatar: "TS",
        rating: 4.7,
        projects: 27,
        bio: "Modern web interface specialist creating responsive and accessible applications. Passionate about performance optimization.",
        location: "Gandhinagar, India",
        experience: "2 years frontend development",
    },
    Student {
        name: "Manish Rao",
        role: "Backend Developer",
        skills: "Go, Python, Redis, PostgreSQL, API Design",
        college: "COEP Pune",
        avatar: "MR",
        rating: 4.6,
        projects: 23,
        bio: "High-performance backend systems engineer. Expertise in distributed systems and database optimization.",
        location: "Pune, India",
        experience: "2 years backend development",
    },
    Student {
        name: "Kavya Nair",
        role: "Content Strategist",
        skills: "SEO, Content Marketing, Technical Writing, Brand Strategy",
        college: "Christ University",
        avatar: "KN",
        rating: 4.8,
        projects: 33,
        bio: "Digital storytelling expert creating compelling content strategies. Specialized in technical documentation and brand voice.",
        location: "Bangalore, India",
        experience: "2.5 years content strategy",
    },
    Student {
        name: "Deepak Menon",
        role: "IoT Developer",
        skills: "Embedded Systems, Raspberry Pi, Arduino, MQTT, Sensors",
        college: "NIT Trichy",
        avatar: "DM",
        rating: 4.7,
        projects: 19,
        bio: "Connected devices innovator building smart IoT solutions. Expertise in hardware-software integration and edge computing.",
        location: "Trichy, India",
        experience: "2 years IoT development",
    },
    Student {
        name: "Pooja Bhatia",
        role: "QA Automation Engineer",
        skills: "Selenium, Cypress, JUnit, TestNG, CI/CD Testing",
        college: "Thapar Institute",
        avatar: "PB",
        rating: 4.8,
        projects: 28,
        bio: "Quality assurance specialist ensuring software reliability. Expert in automated testing frameworks and test strategy.",
        location: "Patiala, India",
        experience: "2 years QA automation",
    },
    Student {
        name: "Siddharth Iyer",
        role: "AR/VR Developer",
        skills: "Unity3D, ARKit, ARCore, Oculus SDK, 3D Graphics",
        college: "SRM University",
        avatar: "SI",
        rating: 4.6,
        projects: 16,
        bio: "Immersive technology pioneer creating augmented and virtual reality experiences. Specialized in spatial computing.",
        location: "Chennai, India",
        experience: "1.5 years AR/VR development",
    },
    Student {
        name: "Ritu Malhotra",
        role: "Business Analyst",
        skills: "Requirements Gathering, Process Modeling, Data Analysis, Stakeholder Management",
        college: "IMT Ghaziabad",
        avatar: "RM",
        rating: 4.9,
        projects: 31,
        bio: "Business process optimization expert translating requirements into technical solutions. Strong analytical and communication skills.",
        location: "Ghaziabad, India",
        experience: "3 years business analysis",
    },
    Student {
        name: "Amitabh Choudhary",
        role: "Database Administrator",
        skills: "Oracle, MySQL, PostgreSQL, MongoDB, Database Design",
        college: "BIT Mesra",
        avatar: "AC",
        rating: 4.7,
        projects: 25,
        bio: "Data infrastructure specialist ensuring optimal database performance and security. Expert in data modeling and optimization.",
        location: "Ranchi, India",
        experience: "3 years DBA experience",
    },
    Student {
        name: "Swati Agarwal",
        role: "Digital Marketing Specialist",
        skills: "PPC, Social Media, Analytics, Campaign Management, Growth Hacking",
        college: "MICA Ahmedabad",
        avatar: "SA",
        rating: 4.8,
        projects: 34,
        bio: "Growth marketing strategist driving customer acquisition and retention. Expertise in data-driven marketing campaigns.",
        location: "Ahmedabad, India",
        experience: "2.5 years digital marketing",
    },
];

/// The project listing, in display order.
pub static PROJECTS: &[Project] = &[
    Project {
        title: "E-commerce Mobile App for Indian Market",
        description: "Building a React Native e-commerce application tailored for Indian consumers with UPI payment integration, regional language support, and local delivery partner APIs. Need developers familiar with Indian payment gateways and localization requirements.",
        skills: "React Native, Firebase, Razorpay, UPI Integration, Localization, Redux",
        budget: "₹2,00,000-₹4,00,000",
        category: "frontend",
        posted: "2 days ago",
        duration: "3-4 months",
        company: "StartupXYZ Pvt Ltd",
        location: "Bangalore, India",
    },
    Project {
        title: "Agricultural Yield Prediction ML Model",
        description: "Developing machine learning models to predict crop yields for Indian farmers using satellite imagery, weather data, and soil analysis. Looking for data scientists experienced with agricultural datasets and geospatial analysis.",
        skills: "Python, TensorFlow, Satellite Imagery, Weather APIs, Geospatial Analysis, Scikit-learn",
        budget: "₹3,50,000-₹6,00,000",
        category: "backend",
        posted: "1 day ago",
        duration: "4-6 months",
        company: "AgriTech Solutions",
        location: "Hyderabad, India",
    },
    Project {
        title: "EdTech Platform UI/UX Redesign",
        description: "Complete redesign of online learning platform focusing on Indian educational patterns, mobile-first approach, and accessibility. Need designers who understand Indian education system and rural connectivity challenges.",
        skills: "Figma, User Research, Education Design, Accessibility, Mobile Design, Wireframing",
        budget: "₹1,50,000-₹3,00,000",
        category: "design",
        posted: "3 days ago",
        duration: "2-3 months",
        company: "LearnIndia EdTech",
        location: "Mumbai, India",
    },
    Project {
        title: "Healthcare Appointment Booking System",
        description: "Building HIPAA-compliant healthcare appointment booking system with telemedicine features, prescription management, and integration with Indian medical databases. Requires full-stack developers with healthcare domain knowledge.",
        skills: "React, Node.js, MongoDB, HIPAA Compliance, Telemedicine APIs, Express.js",
        budget: "₹4,00,000-₹7,00,000",
        category: "frontend",
        posted: "5 days ago",
        duration: "5-6 months",
        company: "MediCare Digital Health",
        location: "Chennai, India",
    },
    Project {
        title: "FinTech Personal Finance Tracker",
        description: "Developing personal finance management app for Indian users with bank statement analysis, investment tracking, and tax calculation features. Need developers experienced with Indian banking APIs and financial regulations.",
        skills: "Flutter, Firebase, Banking APIs, Data Visualization, Financial Calculations, Security",
        budget: "₹2,50,000-₹5,00,000",
        category: "frontend",
        posted: "1 week ago",
        duration: "4-5 months",
        company: "WealthTrack FinTech",
        location: "Pune, India",
    },
    Project {
        title: "Smart City Traffic Management System",
        description: "IoT-based traffic monitoring and management system using computer vision, real-time data processing, and predictive analytics for Indian metropolitan cities. Seeking engineers with IoT and CV expertise.",
        skills: "Computer Vision, IoT Sensors, Real-time Processing, OpenCV, Data Analytics, Cloud Computing",
        budget: "₹6,00,000-₹10,00,000",
        category: "backend",
        posted: "4 days ago",
        duration: "6-8 months",
        company: "SmartCity Solutions",
        location: "Delhi, India",
    },
    Project {
        title: "Regional Language Translation App",
        description: "Building mobile app for real-time translation between major Indian languages (Hindi, Tamil, Telugu, Bengali, Marathi) with offline capabilities and voice recognition. Need linguists and ML engineers.",
        skills: "Natural Language Processing, Speech Recognition, Mobile Development, Offline ML, Linguistics, Android/iOS",
        budget: "₹3,00,000-₹5,50,000",
        category: "backend",
        posted: "3 days ago",
        duration: "5-7 months",
        company: "BhashaTranslate",
        location: "Bangalore, India",
    },
    Project {
        title: "Restaurant Management SaaS Platform",
        description: "Cloud-based restaurant management system with inventory tracking, order management, staff scheduling, and customer loyalty programs. Targeting small to medium restaurants across India.",
        skills: "Vue.js, Laravel, PostgreSQL, Payment Gateways, SMS Integration, Cloud Deployment",
        budget: "₹4,50,000-₹8,00,000",
        category: "frontend",
        posted: "6 days ago",
        duration: "6-9 months",
        company: "FoodTech Solutions",
        location: "Ahmedabad, India",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_and_listing_sizes() {
        assert_eq!(STUDENTS.len(), 20);
        assert_eq!(PROJECTS.len(), 8);
    }

    #[test]
    fn project_categories_are_known_tags() {
        for p in PROJECTS {
            assert!(
                matches!(p.category, "frontend" | "backend" | "design"),
                "unexpected category {:?} on {:?}",
                p.category,
                p.title
            );
        }
    }

    #[test]
    fn exactly_one_design_project() {
        let design: Vec<_> = PROJECTS.iter().filter(|p| p.category == "design").collect();
        assert_eq!(design.len(), 1);
        assert_eq!(design[0].title, "EdTech Platform UI/UX Redesign");
    }

    #[test]
    fn skill_chips_split_on_comma_space() {
        let chips: Vec<_> = PROJECTS[2].skill_chips().collect();
        assert_eq!(chips.first(), Some(&"Figma"));
        assert_eq!(chips.len(), 6);
    }

    #[test]
    fn searchable_fields_are_name_skills_college() {
        let [name, skills, college] = STUDENTS[0].searchable_fields();
        assert_eq!(name, "Arjun Patel");
        assert!(skills.contains("React"));
        assert_eq!(college, "IIT Bombay");
    }
}
