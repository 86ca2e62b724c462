//! The built-in catalog data.

use super::{About, Catalog, ContactLink, Degree, Profile, Role, SkillCategory};

const EMAIL: ContactLink = ContactLink {
    label: "Email",
    target: "mailto:danielblakemorris@gmail.com",
};

const LINKEDIN: ContactLink = ContactLink {
    label: "LinkedIn",
    target: "https://www.linkedin.com/in/daniel-blake-morris",
};

const GITHUB: ContactLink = ContactLink {
    label: "GitHub",
    target: "https://github.com/DBlakeMorris",
};

pub(super) const CATALOG: Catalog = Catalog {
    profile: Profile {
        name: "D.B. Morris",
        subtitles: &[
            "ML & NLP Engineer",
            "Machine Learning Specialist",
            "Natural Language AI Expert",
            "Deep Learning Engineer",
        ],
        actions: &[
            ContactLink {
                label: "Request Resume",
                target: "mailto:danielblakemorris@gmail.com",
            },
            ContactLink {
                label: "Book a Consultation",
                target: "https://calendly.com/danielblakemorris/30min",
            },
        ],
    },
    about: About {
        summary: "A leading Natural Language Processing (NLP) Engineer on LinkedIn, and Data \
                  Science & Machine Learning (ML) specialist with over 4 years of end-to-end \
                  experience in training, evaluating, testing and deploying large scale \
                  models/systems. Experienced in orchestrating complicated data pipelines, system \
                  engineering on large-scale datasets and focused on building data pipelines, ML \
                  frameworks, information retrieval systems and custom LLMs & RAG systems. \
                  Collaborated with high-profile clients and government entities through academic \
                  partnerships with Queen's University, DkIT, Lancaster University and \
                  Loughborough University, as well as in the commercial sector with Reddit, \
                  Anthropic, Hugging Face, ISx4 and SVGC Ltd. Spearheaded and assisted successful \
                  sales pursuits resulting in over $10 million worth of engagements.",
        highlights: &[
            "An engineer at heart who likes to fix more than he breaks.",
            "Researching and democratising niche text analytics understanding with DkIT and the \
             Hugging Face community.",
            "Consulted across the board, from startups to Fortune 10 Technology firms.",
        ],
        links: &[LINKEDIN, GITHUB],
    },
    experience: &[
        Role {
            title: "AI/ML Engineer",
            period: "September 2024 to Current",
            organisation: "Reddit",
            duties: &[
                "Developed and deployed machine learning models for content analysis and \
                 moderation in alignment with company policies.",
                "Implemented machine learning solutions to enhance content quality and user \
                 experience at scale, improving community moderation systems.",
            ],
            achievements: &[
                "Designed and launched an automated system to assist in community guideline \
                 creation, significantly improving the new community onboarding process.",
                "Implemented a React-based HiTL tool with a Python FastAPI backend, including \
                 features like dynamic data visualisation, efficient data handling, and \
                 user-friendly interfaces for data annotators.",
                "Developed and deployed machine learning solutions for content analysis, \
                 achieving strong performance metrics across large-scale deployments.",
                "Enhanced existing systems through integration of advanced reasoning \
                 capabilities, leading to meaningful improvements in accuracy for critical use \
                 cases.",
            ],
        },
        Role {
            title: "Alpha/Beta Tester (On-Call)",
            period: "October 2024 to Current",
            organisation: "Anthropic",
            duties: &["Product tested: Haiku 3.5 (Oct '24), Claude Desktop (Oct '24)."],
            achievements: &[],
        },
        Role {
            title: "Senior ML & NLP Engineer",
            period: "January 2024 to July 2024",
            organisation: "ISx4",
            duties: &[
                "Spearheaded all NLP, AI, and ML initiatives across product teams, driven fast \
                 strategic prototyping and delivered innovative solutions.",
                "Authored and presented Generative AI research papers with Queen's University \
                 Belfast and DKIT.",
                "Mentored and managed a great team of engineers in ML end-to-end development.",
            ],
            achievements: &[
                "Implemented an offline quantized RAG system using 'hkunlp/instructor-large' \
                 embeddings and Chroma vector store for corporate policies validation, achieving \
                 84% retrieval accuracy on expert-validated queries. Reduced embedding model \
                 size from 500MB to 170MB through 8-bit quantization while maintaining data \
                 privacy.",
                "Feature engineered a multi-stage ML pipeline combining LightGBM with TF-IDF and \
                 custom email-specific features for automated email classification, achieving \
                 86% accuracy (up from 63% baseline) in categorising expense reports, queries, \
                 and service requests across 10K+ emails, reducing manual triage time.",
                "Developed an expense claim validation system utilising domain-specific \
                 knowledge graphs and a novel embedding-based approach with neural networks, \
                 achieving 87% fraud detection accuracy on 2k monthly claims, reducing \
                 processing time.",
            ],
        },
        Role {
            title: "ML & NLP Scientist/Engineer",
            period: "October 2022 to January 2024",
            organisation: "Loughborough University | SVGC Ltd",
            duties: &[
                "Developed and managed multiple AI-related projects in a Knowledge Transfer \
                 Partnership (KTP) with SVGC Ltd, delivering NLP solutions to high-profile \
                 government clients.",
                "Conducted thorough requirements analyses, user experience assessments, and \
                 stakeholder presentations to inform, end-to-end train, evaluate, test and \
                 containerise NLP/ML solutions for classified government use cases.",
            ],
            achievements: &[
                "Pioneered a Semantic Role Labelling system using transformers with multi-head \
                 attention for GDPR detection, achieving 78% F1-score and improving sensitivity \
                 detection accuracy by 4% in classified documents.",
                "Engineered a secure offline quantized RAG system leveraging \
                 'intfloat/e5-large-v2' embeddings and custom knowledge bases for classified \
                 document analysis, achieving 84% retrieval accuracy on expert-validated queries \
                 across hundreds of docs.",
                "Architected a topic modelling system combining hierarchical Dirichlet processes \
                 with dense embeddings, processing thousands of classified documents to identify \
                 20+ distinct topic clusters with 84% coherence. Reduced batch analysis time \
                 while increasing topic detection precision by approx. 10%.",
            ],
        },
        Role {
            title: "NLP Researcher",
            period: "October 2020 to October 2022",
            organisation: "Lancaster University",
            duties: &[
                "Volunteered to contribute to Linguistics research groups, leading end-to-end \
                 development of NLU and NLP models for diverse funded projects, from research to \
                 deployment.",
            ],
            achievements: &[
                "Engineered a historical authorship attribution system using Bi-LSTMs and CRFs, \
                 achieving 63% F1-score in identifying medieval scribes (1420-1484) through \
                 innovative linguistic feature extraction with clause relativisation patterns \
                 across 50+ Paston family letters.",
                "Developed a sentiment analysis system for social media using BERT fine-tuning \
                 and Critical Discourse Analysis, achieving 84% F1-score (up from 78%) on \
                 8-class emotion classification. Improved detection of emerging slang and \
                 context-dependent expressions by 15%, validated across 100K+ posts.",
            ],
        },
    ],
    education: &[Degree {
        title: "Master's in Computational Linguistics",
        institution: "Lancaster University",
        focus_areas: &[
            "Natural Language Processing.",
            "Knowledge Graphs & Ontologies.",
            "Discourse Analysis.",
            "Corpus Linguistics.",
        ],
    }],
    skills: &[
        SkillCategory {
            name: "ML & AI",
            skills: &[
                "ML",
                "Deep Learning & Neural Networks",
                "NLP & NLU",
                "LLMs & RAG",
                "Content Moderation",
                "MLOps & Model Deployment",
                "Knowledge Base Construction",
            ],
        },
        SkillCategory {
            name: "Data Management",
            skills: &["SQL", "Vector Databases"],
        },
        SkillCategory {
            name: "Cloud & Infrastructure",
            skills: &[
                "Docker",
                "Kubernetes",
                "Git",
                "CI/CD",
                "Distributed Systems",
                "AWS",
                "Azure",
                "GCP",
            ],
        },
        SkillCategory {
            name: "Programming Languages",
            skills: &["Python", "R", "Java", "JavaScript/TypeScript"],
        },
        SkillCategory {
            name: "ML & Data Frameworks",
            skills: &[
                "PyTorch",
                "TensorFlow",
                "Gensim",
                "SpaCy",
                "NLTK",
                "Pandas",
                "NumPy",
                "Scikit-learn",
                "SAS",
            ],
        },
        SkillCategory {
            name: "Web Development",
            skills: &["React", "HTML/CSS", "REST APIs"],
        },
        SkillCategory {
            name: "ML Tools & Development",
            skills: &[
                "Gradio",
                "Streamlit",
                "MLFlow",
                "Weight & Biases",
                "Langchain",
                "Chroma",
            ],
        },
        SkillCategory {
            name: "Professional Skills",
            skills: &[
                "Technical Leadership",
                "A/B Testing",
                "Technical Writing",
                "Project Management (Jira)",
                "Stakeholder Communication",
                "Agile",
            ],
        },
    ],
    footer: &[EMAIL, LINKEDIN, GITHUB],
};
