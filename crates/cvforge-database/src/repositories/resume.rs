//! Resume repository implementation.
//!
//! A generated resume is persisted as one root row plus child rows per
//! document section, all inserted in a single transaction. Deletes rely
//! on `ON DELETE CASCADE` from the child tables.

use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use uuid::Uuid;

use cvforge_core::error::{AppError, ErrorKind};
use cvforge_core::result::AppResult;
use cvforge_core::types::pagination::{PageRequest, PageResponse};
use cvforge_entity::resume::{NewResume, ResumeFilter, ResumeRecord, ResumeSummary};

/// Repository for resume persistence and queries.
#[derive(Debug, Clone)]
pub struct ResumeRepository {
    pool: PgPool,
}

impl ResumeRepository {
    /// Create a new resume repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a generated resume: root row plus all section rows,
    /// in one transaction.
    pub async fn create(&self, new: &NewResume) -> AppResult<ResumeRecord> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let doc = &new.document;
        let basics = &doc.basics;

        let record = sqlx::query_as::<_, ResumeRecord>(
            "INSERT INTO resumes \
               (id, user_id, url, filename, full_name, job_title, summary, salary, \
                job_location, job_type, experience_years, website, profile_image, \
                email, phone_number, template, lang) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
             RETURNING *",
        )
        .bind(new.id)
        .bind(new.user_id)
        .bind(&new.url)
        .bind(&new.filename)
        .bind(&basics.name)
        .bind(&basics.label)
        .bind(&basics.summary)
        .bind(basics.salary)
        .bind(basics.job_location)
        .bind(basics.job_type)
        .bind(basics.experience_years)
        .bind(&basics.url)
        .bind(&basics.image)
        .bind(&basics.email)
        .bind(&basics.phone)
        .bind(&doc.meta.template)
        .bind(&doc.meta.lang)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert resume", e))?;

        sqlx::query(
            "INSERT INTO resume_locations (resume_id, city, country_code, region) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(new.id)
        .bind(&basics.location.city)
        .bind(&basics.location.country_code)
        .bind(&basics.location.region)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert location", e))?;

        for profile in &basics.profiles {
            sqlx::query(
                "INSERT INTO resume_profiles (resume_id, network, username, url) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(new.id)
            .bind(&profile.network)
            .bind(&profile.username)
            .bind(&profile.url)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert profile", e)
            })?;
        }

        for work in &doc.work {
            sqlx::query(
                "INSERT INTO resume_works \
                   (resume_id, position, company, start_date, end_date, summary, \
                    location, skills, contract_type) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
            )
            .bind(new.id)
            .bind(&work.position)
            .bind(&work.company)
            .bind(&work.start_date)
            .bind(&work.end_date)
            .bind(&work.summary)
            .bind(&work.location)
            .bind(&work.skills)
            .bind(&work.contract_type)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert work entry", e)
            })?;
        }

        for project in &doc.projects {
            sqlx::query(
                "INSERT INTO resume_projects (resume_id, name, description, url) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(new.id)
            .bind(&project.name)
            .bind(&project.description)
            .bind(&project.url)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert project", e)
            })?;
        }

        for education in &doc.education {
            sqlx::query(
                "INSERT INTO resume_educations \
                   (resume_id, institution, area, study_type, location, start_date, \
                    end_date, score, courses) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
            )
            .bind(new.id)
            .bind(&education.institution)
            .bind(&education.area)
            .bind(&education.study_type)
            .bind(&education.location)
            .bind(&education.start_date)
            .bind(&education.end_date)
            .bind(&education.score)
            .bind(&education.courses)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert education entry", e)
            })?;
        }

        for certificate in &doc.certificates {
            sqlx::query(
                "INSERT INTO resume_certificates (resume_id, title, date, issuer, score, url) \
                 VALUES ($1, $2, $3, $4, $5, $6)",
            )
            .bind(new.id)
            .bind(&certificate.title)
            .bind(&certificate.date)
            .bind(&certificate.issuer)
            .bind(&certificate.score)
            .bind(&certificate.url)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert certificate", e)
            })?;
        }

        Self::insert_skills(&mut tx, new.id, "resume_hard_skills", &doc.skills).await?;
        Self::insert_skills(&mut tx, new.id, "resume_soft_skills", &doc.soft_skills).await?;

        for language in &doc.languages {
            sqlx::query(
                "INSERT INTO resume_languages (resume_id, language, fluency) VALUES ($1, $2, $3)",
            )
            .bind(new.id)
            .bind(&language.language)
            .bind(&language.fluency)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert language", e)
            })?;
        }

        for interest in &doc.interests {
            sqlx::query(
                "INSERT INTO resume_interests (resume_id, name, keywords) VALUES ($1, $2, $3)",
            )
            .bind(new.id)
            .bind(&interest.name)
            .bind(&interest.keywords)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert interest", e)
            })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit resume insert", e)
        })?;

        Ok(record)
    }

    async fn insert_skills(
        tx: &mut Transaction<'_, Postgres>,
        resume_id: Uuid,
        table: &str,
        skills: &[cvforge_entity::resume::Skill],
    ) -> AppResult<()> {
        for skill in skills {
            let sql =
                format!("INSERT INTO {table} (resume_id, name, level, keywords) VALUES ($1, $2, $3, $4)");
            sqlx::query(&sql)
                .bind(resume_id)
                .bind(&skill.name)
                .bind(&skill.level)
                .bind(&skill.keywords)
                .execute(&mut **tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to insert skill", e)
                })?;
        }
        Ok(())
    }

    /// Find a resume root row by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ResumeRecord>> {
        sqlx::query_as::<_, ResumeRecord>("SELECT * FROM resumes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find resume", e))
    }

    /// Public listing with optional filters, newest first.
    pub async fn list(
        &self,
        filter: &ResumeFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ResumeSummary>> {
        let mut count_builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT COUNT(*) FROM resumes r \
             JOIN resume_locations l ON l.resume_id = r.id",
        );
        Self::push_filters(&mut count_builder, filter);

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count resumes", e))?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT r.id, r.user_id, r.filename, r.url, r.job_title, l.city, r.salary, \
                    r.job_location, r.job_type, r.experience_years \
             FROM resumes r \
             JOIN resume_locations l ON l.resume_id = r.id",
        );
        Self::push_filters(&mut builder, filter);
        builder.push(" ORDER BY r.created_at DESC LIMIT ");
        builder.push_bind(page.limit() as i64);
        builder.push(" OFFSET ");
        builder.push_bind(page.offset() as i64);

        let rows = builder
            .build_query_as::<ResumeSummary>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list resumes", e))?;

        Ok(PageResponse::new(
            rows,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    fn push_filters(builder: &mut QueryBuilder<Postgres>, filter: &ResumeFilter) {
        builder.push(" WHERE 1 = 1");
        if let Some(job_title) = &filter.job_title {
            builder.push(" AND r.job_title ILIKE ");
            builder.push_bind(format!("%{job_title}%"));
        }
        if let Some(job_location) = filter.job_location {
            builder.push(" AND r.job_location = ");
            builder.push_bind(job_location);
        }
        if let Some(job_type) = filter.job_type {
            builder.push(" AND r.job_type = ");
            builder.push_bind(job_type);
        }
        if let Some(min_salary) = filter.min_salary {
            builder.push(" AND r.salary >= ");
            builder.push_bind(min_salary);
        }
        if let Some(region) = &filter.region {
            builder.push(" AND l.region = ");
            builder.push_bind(region.clone());
        }
        if let Some(min_experience) = filter.min_experience {
            builder.push(" AND r.experience_years >= ");
            builder.push_bind(min_experience);
        }
    }

    /// List all resumes of one user, newest first.
    pub async fn list_by_user(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ResumeSummary>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM resumes WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count user resumes", e)
            })?;

        let rows = sqlx::query_as::<_, ResumeSummary>(
            "SELECT r.id, r.user_id, r.filename, r.url, r.job_title, l.city, r.salary, \
                    r.job_location, r.job_type, r.experience_years \
             FROM resumes r \
             JOIN resume_locations l ON l.resume_id = r.id \
             WHERE r.user_id = $1 \
             ORDER BY r.created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list user resumes", e)
        })?;

        Ok(PageResponse::new(
            rows,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Delete a resume. Child rows cascade.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete resume", e))?;

        Ok(result.rows_affected() > 0)
    }
}
