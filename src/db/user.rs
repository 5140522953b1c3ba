use crate::db::service::DbService;
use crate::types::{
    error::AppError,
    user::{DBUserCreate, DBUserUpdate},
};
use chrono::Utc;
use entity::user::{self, ActiveModel as UserActive, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl DbService {
    async fn email_taken<C: ConnectionTrait>(
        conn: &C,
        email: &str,
        except: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = User::find().filter(user::Column::Email.eq(email));
        if let Some(id) = except {
            query = query.filter(user::Column::Id.ne(id));
        }
        Ok(query.count(conn).await? > 0)
    }

    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await?)
    }

    pub async fn get_user_by_id(&self, id: i32) -> Result<UserModel, AppError> {
        User::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Duplicate check and insert share one transaction; the unique index on
    /// `email` catches whatever slips between concurrent creates.
    pub async fn create_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        let txn = self.db.begin().await?;

        if Self::email_taken(&txn, &payload.email, None).await? {
            txn.rollback().await?;
            return Err(AppError::AlreadyExists);
        }

        let now = Utc::now();
        let created = UserActive {
            id: NotSet,
            email: Set(payload.email),
            name: Set(payload.name),
            login: Set(payload.login),
            password: Set(payload.password_hash),
            img: Set(payload.img),
            token: Set(payload.token),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(created)
    }

    /// Applies only the supplied fields. A missing user is reported before
    /// anything is written.
    pub async fn update_user(&self, id: i32, changes: DBUserUpdate) -> Result<UserModel, AppError> {
        let txn = self.db.begin().await?;

        let Some(existing) = User::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Err(AppError::NotFound);
        };

        if let Some(email) = &changes.email {
            if *email != existing.email && Self::email_taken(&txn, email, Some(id)).await? {
                txn.rollback().await?;
                return Err(AppError::AlreadyExists);
            }
        }

        let mut am: UserActive = existing.into();
        if let Some(email) = changes.email {
            am.email = Set(email);
        }
        if let Some(name) = changes.name {
            am.name = Set(name);
        }
        if let Some(login) = changes.login {
            am.login = Set(login);
        }
        if let Some(hash) = changes.password_hash {
            am.password = Set(hash);
        }
        if let Some(img) = changes.img {
            am.img = Set(Some(img));
        }
        if let Some(token) = changes.token {
            am.token = Set(Some(token));
        }
        am.updated_at = Set(Utc::now());

        let updated = am.update(&txn).await?;
        txn.commit().await?;
        Ok(updated)
    }

    pub async fn delete_user(&self, id: i32) -> Result<(), AppError> {
        let res = User::delete_by_id(id).exec(&self.db).await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
