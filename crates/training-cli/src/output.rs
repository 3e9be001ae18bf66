//! Rendering of results for the terminal, as styled text or JSON records

use console::style;
use training_adapter::{CourseRecord, EmployeeRecord, RoleRecord};
use training_domain::{Course, Employee, Role};

#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn employee(&self, employee: &Employee) -> anyhow::Result<String> {
        if self.json {
            return Ok(serde_json::to_string_pretty(&EmployeeRecord::from(employee))?);
        }

        let roles = if employee.current_roles().is_empty() {
            style("(none)").dim().to_string()
        } else {
            employee
                .current_roles()
                .iter()
                .map(|r| format!("{} ({})", r.name(), r.id()))
                .collect::<Vec<_>>()
                .join(", ")
        };

        let mut text = format!(
            "{}  {}\n  Roles:   {}\n  Courses:",
            style(employee.id()).bold(),
            employee.name(),
            roles
        );
        if employee.assigned_courses().is_empty() {
            text.push_str(&format!(" {}", style("(none)").dim()));
        }
        for course in employee.assigned_courses() {
            text.push_str(&format!("\n    {}  {}", style(course.id()).cyan(), course.title()));
        }
        Ok(text)
    }

    pub fn employees(&self, employees: &[Employee]) -> anyhow::Result<String> {
        if self.json {
            let records: Vec<EmployeeRecord> = employees.iter().map(EmployeeRecord::from).collect();
            return Ok(serde_json::to_string_pretty(&records)?);
        }

        if employees.is_empty() {
            return Ok("No employees.".to_string());
        }

        Ok(employees
            .iter()
            .map(|e| {
                format!(
                    "{}  {:<20} {} role(s), {} course(s)",
                    style(e.id()).bold(),
                    e.name(),
                    e.current_roles().len(),
                    e.assigned_courses().len()
                )
            })
            .collect::<Vec<_>>()
            .join("\n"))
    }

    pub fn roles(&self, roles: &[Role]) -> anyhow::Result<String> {
        if self.json {
            let records: Vec<RoleRecord> = roles.iter().map(RoleRecord::from).collect();
            return Ok(serde_json::to_string_pretty(&records)?);
        }

        Ok(roles
            .iter()
            .map(|r| format!("{}  {}", style(r.id()).bold(), r.name()))
            .collect::<Vec<_>>()
            .join("\n"))
    }

    pub fn courses(&self, courses: &[Course]) -> anyhow::Result<String> {
        if self.json {
            let records: Vec<CourseRecord> = courses.iter().map(CourseRecord::from).collect();
            return Ok(serde_json::to_string_pretty(&records)?);
        }

        Ok(courses
            .iter()
            .map(|c| format!("{}  {}", style(c.id()).cyan(), c.title()))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}
