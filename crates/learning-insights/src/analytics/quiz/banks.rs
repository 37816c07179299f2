use super::super::domain::QuizQuestion;

pub(crate) static DEVOPS_BANK: [QuizQuestion; 5] = [
    QuizQuestion {
        id: 101,
        question: "What does a CI/CD pipeline automate?",
        options: [
            "Building, testing and deploying code changes",
            "Writing application requirements",
            "Designing user interfaces",
            "Negotiating hosting contracts",
        ],
        correct_index: 0,
    },
    QuizQuestion {
        id: 102,
        question: "Which file describes how a Docker image is built?",
        options: ["docker-compose.lock", "Dockerfile", "Makefile.docker", "image.json"],
        correct_index: 1,
    },
    QuizQuestion {
        id: 103,
        question: "What is the smallest deployable unit in Kubernetes?",
        options: ["Node", "Deployment", "Pod", "Namespace"],
        correct_index: 2,
    },
    QuizQuestion {
        id: 104,
        question: "Which practice keeps infrastructure definitions under version control?",
        options: [
            "Manual server configuration",
            "Blue-green testing",
            "Pair programming",
            "Infrastructure as Code",
        ],
        correct_index: 3,
    },
    QuizQuestion {
        id: 105,
        question: "What is a key benefit of splitting a system into microservices?",
        options: [
            "Services can be deployed and scaled independently",
            "Network calls disappear",
            "A single database schema is enforced",
            "No monitoring is required",
        ],
        correct_index: 0,
    },
];

pub(crate) static JAVA_BACKEND_BANK: [QuizQuestion; 5] = [
    QuizQuestion {
        id: 201,
        question: "Which annotation marks a Spring class as a REST controller?",
        options: ["@Service", "@RestController", "@Entity", "@Bean"],
        correct_index: 1,
    },
    QuizQuestion {
        id: 202,
        question: "What does the JVM execute?",
        options: ["Java source files", "Bytecode", "Machine code only", "XML descriptors"],
        correct_index: 1,
    },
    QuizQuestion {
        id: 203,
        question: "Which Spring feature supplies collaborators to a bean?",
        options: [
            "Reflection caching",
            "Aspect weaving",
            "Dependency injection",
            "Bytecode shading",
        ],
        correct_index: 2,
    },
    QuizQuestion {
        id: 204,
        question: "Which JPA annotation maps a class to a database table?",
        options: ["@Table only", "@Column", "@Repository", "@Entity"],
        correct_index: 3,
    },
    QuizQuestion {
        id: 205,
        question: "Which HTTP status code signals that a resource was created?",
        options: ["201", "200", "204", "302"],
        correct_index: 0,
    },
];

pub(crate) static GENERAL_BANK: [QuizQuestion; 3] = [
    QuizQuestion {
        id: 901,
        question: "Which habit best supports long-term retention of new material?",
        options: [
            "Spaced review sessions",
            "Cramming the night before",
            "Re-reading notes once",
            "Skipping practice exercises",
        ],
        correct_index: 0,
    },
    QuizQuestion {
        id: 902,
        question: "What is the main purpose of a formative assessment?",
        options: [
            "Assign a final grade",
            "Give feedback during learning",
            "Rank students against each other",
            "Replace course content",
        ],
        correct_index: 1,
    },
    QuizQuestion {
        id: 903,
        question: "When stuck on a problem, what is usually the most productive next step?",
        options: [
            "Abandon the module",
            "Wait for the exam",
            "Break it into smaller questions and ask for help",
            "Memorise the answer key",
        ],
        correct_index: 2,
    },
];
