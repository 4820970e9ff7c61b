use crate::profile::Accent;
use crate::project::{Category, GalleryImage, Project, ProjectDetail, ProjectId, TechStack};

/// Showcase projects in display order.
pub static PROJECTS: [Project; 4] = [
    Project {
        id: ProjectId(1),
        category: Category::Dev,
        title: "Symphoni Music Institute",
        description: "A modern web platform designed for a music institute to present classes, programs, and institute information. Built with a focus on clean UI, readability, and responsiveness.",
        image_url: "https://images.unsplash.com/photo-1514320291840-2e0a9bf2a9ae?q=80&w=2070&auto=format&fit=crop",
        tags: &["React", "Node.js", "Tailwind"],
        featured: true,
        accent: Accent::Cyan,
        detail: Some(ProjectDetail {
            overview: "Symphoni Music Institute needed a modern digital presence to effectively present their music programs and class details to potential students. This project focused on building a clean, responsive website that serves as the institute's primary digital touchpoint.",
            problem: "The institute lacked a centralized digital platform, making it difficult for potential students and parents to find accurate information regarding curriculum, class schedules, and institute details.",
            solution: "We designed and developed a responsive website that organizes information into an intuitive layout, serving as a digital brochure that enhances the institute's professional image and credibility.",
            features: &[
                "Responsive Landing Page",
                "Comprehensive Classes & Programs Section",
                "Institute Information & About Us",
                "Mobile-Optimized Design",
                "Clean & Modern UI",
            ],
            tech_stack: TechStack {
                frontend: "React / Tailwind CSS",
                backend: "Node.js (Server-side rendering)",
                database: "N/A (Static Content)",
            },
            role: "I led the frontend design and implementation, translating UI/UX concepts into code. My focus was on ensuring the site was fully responsive across devices and maintaining a consistent visual identity.",
            outcome: "The project established a credible online identity for Symphoni Music Institute, significantly improving information accessibility for students and streamlining the inquiry process.",
            gallery: &[
                GalleryImage {
                    url: "https://images.unsplash.com/photo-1514320291840-2e0a9bf2a9ae?auto=format&fit=crop&q=80&w=2070",
                    caption: "Main landing page highlighting the institute identity",
                },
                GalleryImage {
                    url: "https://images.unsplash.com/photo-1511379938547-c1f69419868d?auto=format&fit=crop&q=80&w=2070",
                    caption: "List of music programs and class details",
                },
                GalleryImage {
                    url: "https://images.unsplash.com/photo-1555421689-d68471e189f2?auto=format&fit=crop&q=80&w=2070",
                    caption: "Responsive design optimized for mobile devices",
                },
            ],
        }),
    },
    Project {
        id: ProjectId(2),
        category: Category::Dev,
        title: "Maths Tuition Management",
        description: "A web-based system for managing student registration, payments, and attendance using QR codes. Replaces manual registers with a digital solution.",
        image_url: "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?q=80&w=2070&auto=format&fit=crop",
        tags: &["Full Stack", "UX Design"],
        featured: false,
        accent: Accent::Purple,
        detail: Some(ProjectDetail {
            overview: "This web-based management system digitizes the administrative operations of a maths tuition class. It handles the entire student lifecycle from registration to attendance tracking via QR codes and monthly fee management.",
            problem: "Managing student records, attendance, and fee payments using manual paper-based registers was time-consuming, prone to human error, and lacked real-time tracking capabilities.",
            solution: "A centralized web application that automates attendance using unique student QR codes and provides a dashboard for tracking payments and student analytics, eliminating manual paperwork.",
            features: &[
                "Digital Student Registration",
                "QR Code Generation & Scanning for Attendance",
                "Fee Payment Tracking",
                "Real-time Attendance Analytics",
                "Payment Status Dashboards",
            ],
            tech_stack: TechStack {
                frontend: "React",
                backend: "Node.js / Express",
                database: "MySQL",
            },
            role: "I worked as a Full Stack developer, implementing the core logic for QR code generation and scanning integration. I also designed the database schema for handling student records and payment history.",
            outcome: "The system successfully replaced manual registers, streamlining the check-in process during classes and provided instant financial oversight for the tuition management.",
            gallery: &[
                GalleryImage {
                    url: "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?auto=format&fit=crop&q=80&w=2070",
                    caption: "Registering students into the system",
                },
                GalleryImage {
                    url: "https://images.unsplash.com/photo-1554224155-8d04cb21cd6c?auto=format&fit=crop&q=80&w=2070",
                    caption: "Tracking class fees and payment status",
                },
                GalleryImage {
                    url: "https://images.unsplash.com/photo-1595079676339-1534801fafde?auto=format&fit=crop&q=80&w=2070",
                    caption: "Unique QR codes generated for student entry",
                },
                GalleryImage {
                    url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&q=80&w=2070",
                    caption: "Attendance and payment analysis overview",
                },
            ],
        }),
    },
    Project {
        id: ProjectId(3),
        category: Category::Research,
        title: "Plant Leaf Disease Detection",
        description: "A research-focused application utilizing CNNs to detect diseases in Rice and Chilli crops. Designed to validate deep learning models on real-world agricultural data.",
        image_url: "https://images.unsplash.com/photo-1620712943543-bcc4688e7485?q=80&w=2065&auto=format&fit=crop",
        tags: &["Research Tool", "Data Mgmt"],
        featured: false,
        accent: Accent::Teal,
        detail: Some(ProjectDetail {
            overview: "This research project focuses on applying deep learning techniques to agriculture. The application uses Convolutional Neural Networks (CNN) to detect and classify diseases in Rice and Chilli leaves based on real-world field images.",
            problem: "Manual identification of plant diseases is labor-intensive, requires expert knowledge, and is difficult to scale, leading to delayed treatments and crop loss.",
            solution: "An AI-powered system that automates disease detection. By training CNNs on a curated dataset of real-world leaf images, the system can classify healthy vs. diseased leaves with high accuracy.",
            features: &[
                "Multi-crop Disease Detection (Rice & Chilli)",
                "CNN Model Integration",
                "Real-world Dataset Training",
                "Healthy vs. Diseased Classification",
                "Scalable Architecture for Future Crops",
            ],
            tech_stack: TechStack {
                frontend: "Python / Streamlit (Prototype UI)",
                backend: "TensorFlow / Keras",
                database: "Local Image Dataset",
            },
            role: "My primary role was in the research and experimental phase. I curated the dataset, performed image preprocessing, and trained the CNN models. I also developed the evaluation pipeline to test model accuracy.",
            outcome: "The project validated the effectiveness of CNNs on noisy, real-world agricultural data and established a scalable framework that can be extended to other tree species and crop types.",
            gallery: &[
                GalleryImage {
                    url: "https://images.unsplash.com/photo-1586771107445-d3ca888129ff?auto=format&fit=crop&q=80&w=2072",
                    caption: "Sample real-world leaf images used for training",
                },
                GalleryImage {
                    url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&q=80&w=2070",
                    caption: "Preprocessing steps applied to leaf images",
                },
                GalleryImage {
                    url: "https://images.unsplash.com/photo-1555949963-ff9fe0c870eb?auto=format&fit=crop&q=80&w=2070",
                    caption: "CNN-based disease detection pipeline",
                },
                GalleryImage {
                    url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&q=80&w=2070",
                    caption: "Model predictions for leaf disease classification",
                },
            ],
        }),
    },
    Project {
        id: ProjectId(4),
        category: Category::Dev,
        title: "Health Monitoring System",
        description: "A centralized digital platform designed to replace inconsistency in manual tracking with structured health data analysis. Built using React, Spring Boot, and MySQL.",
        image_url: "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?q=80&w=2070&auto=format&fit=crop",
        tags: &["Java Spring Boot", "React", "MySQL"],
        featured: false,
        accent: Accent::Blue,
        detail: Some(ProjectDetail {
            overview: "This project is a group-developed Health Monitoring System designed to collect, monitor, and analyze basic health-related data. The system focuses on providing a structured and reliable way to track health information using a software-based solution, replacing outdated manual methods.",
            problem: "Manual health data tracking is often inconsistent, difficult to manage, and prone to errors, especially when handled across multiple individuals or paper-based records.",
            solution: "The system provides a centralized digital platform where health data can be recorded, stored, and monitored efficiently. It improves data organization, accessibility, and consistency for both patients and administrators.",
            features: &[
                "Health data recording and management",
                "Basic health parameter monitoring",
                "Structured data storage",
                "User-friendly interface",
                "Secure and reliable data handling",
            ],
            tech_stack: TechStack {
                frontend: "React / Web-based UI",
                backend: "Java Spring Boot / Node.js",
                database: "MySQL",
            },
            role: "I contributed to feature development and implementation, focusing on both backend logic and frontend integration. My role involved collaborating closely with team members to ensure seamless system connectivity.",
            outcome: "The project resulted in a functional health monitoring system that demonstrates effective teamwork, sound system design skills, and the ability to apply technical concepts to real-world application development.",
            gallery: &[
                GalleryImage {
                    url: "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?auto=format&fit=crop&q=80&w=2070",
                    caption: "System Dashboard Overview",
                },
                GalleryImage {
                    url: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?auto=format&fit=crop&q=80&w=2070",
                    caption: "Patient Data Entry Interface",
                },
                GalleryImage {
                    url: "https://images.unsplash.com/photo-1576091160550-217358c7e618?auto=format&fit=crop&q=80&w=2070",
                    caption: "Real-time Health Analytics",
                },
            ],
        }),
    },
];
