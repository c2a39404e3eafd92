use super::*;

impl<'a> BookingRepo for DbReadOnly<'a> {
    fn create_booking(&self, _booking: &Booking) -> Result<()> {
        unreachable!();
    }
    fn update_booking(&self, _booking: &Booking) -> Result<()> {
        unreachable!();
    }
    fn delete_booking(&self, _id: &Id) -> Result<()> {
        unreachable!();
    }

    fn get_booking(&self, id: &Id) -> Result<Booking> {
        get_booking(&mut self.conn.borrow_mut(), id)
    }
    fn all_bookings(&self, kind: Option<ChargerKind>) -> Result<Vec<Booking>> {
        all_bookings(&mut self.conn.borrow_mut(), kind)
    }
    fn bookings_of_station(&self, station_id: &Id) -> Result<Vec<Booking>> {
        bookings_of_station(&mut self.conn.borrow_mut(), station_id)
    }
    fn bookings_of_user(&self, user_id: &Id) -> Result<Vec<Booking>> {
        bookings_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> BookingRepo for DbReadWrite<'a> {
    fn create_booking(&self, booking: &Booking) -> Result<()> {
        create_booking(&mut self.conn.borrow_mut(), booking)
    }
    fn update_booking(&self, booking: &Booking) -> Result<()> {
        update_booking(&mut self.conn.borrow_mut(), booking)
    }
    fn delete_booking(&self, id: &Id) -> Result<()> {
        delete_booking(&mut self.conn.borrow_mut(), id)
    }

    fn get_booking(&self, id: &Id) -> Result<Booking> {
        get_booking(&mut self.conn.borrow_mut(), id)
    }
    fn all_bookings(&self, kind: Option<ChargerKind>) -> Result<Vec<Booking>> {
        all_bookings(&mut self.conn.borrow_mut(), kind)
    }
    fn bookings_of_station(&self, station_id: &Id) -> Result<Vec<Booking>> {
        bookings_of_station(&mut self.conn.borrow_mut(), station_id)
    }
    fn bookings_of_user(&self, user_id: &Id) -> Result<Vec<Booking>> {
        bookings_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> BookingRepo for DbConnection<'a> {
    fn create_booking(&self, booking: &Booking) -> Result<()> {
        create_booking(&mut self.conn.borrow_mut(), booking)
    }
    fn update_booking(&self, booking: &Booking) -> Result<()> {
        update_booking(&mut self.conn.borrow_mut(), booking)
    }
    fn delete_booking(&self, id: &Id) -> Result<()> {
        delete_booking(&mut self.conn.borrow_mut(), id)
    }

    fn get_booking(&self, id: &Id) -> Result<Booking> {
        get_booking(&mut self.conn.borrow_mut(), id)
    }
    fn all_bookings(&self, kind: Option<ChargerKind>) -> Result<Vec<Booking>> {
        all_bookings(&mut self.conn.borrow_mut(), kind)
    }
    fn bookings_of_station(&self, station_id: &Id) -> Result<Vec<Booking>> {
        bookings_of_station(&mut self.conn.borrow_mut(), station_id)
    }
    fn bookings_of_user(&self, user_id: &Id) -> Result<Vec<Booking>> {
        bookings_of_user(&mut self.conn.borrow_mut(), user_id)
    }
}

fn new_booking(b: &Booking) -> models::NewBooking<'_> {
    let v = &b.vehicle;
    models::NewBooking {
        id: b.id.as_str(),
        kind: store_charger_kind(b.kind),
        station_id: b.station_id.as_str(),
        booked_by: b.booked_by.as_ref().map(Id::as_str),
        created_at: b.created_at.as_millis(),
        date: b.date.map(format_date),
        start_time: b.start_time.map(Timestamp::as_millis),
        end_time: b.end_time.map(Timestamp::as_millis),
        message: b.message.as_deref(),
        contact_number: b.contact_number.as_deref(),
        status: b.status.as_str(),
        date_leave: v.date_leave.map(format_date),
        time_leave: v.time_leave.as_deref(),
        current_battery_level: v.current_battery_level.map(|l| i16::from(l.percent())),
        desired_battery_level: v.desired_battery_level.map(|l| i16::from(l.percent())),
        park_location_spot_id: v.park_location_spot_id.as_deref(),
        send_sms_on_complete: v.send_sms_on_complete,
        site_picker: v.site_picker.as_deref(),
        vehicle_model: v.vehicle_model.as_deref(),
        vehicle_license_plate: v.vehicle_license_plate.as_deref(),
        vehicle_year: v.vehicle_year.map(i32::from),
        vehicle_color: v.vehicle_color.as_deref(),
        vehicle_driver_full_name: v.vehicle_driver_full_name.as_deref(),
        dial_code: v.dial_code.as_deref(),
        vehicle_driver_phone_number: v.vehicle_driver_phone_number.as_deref(),
        park_location_floor: v.park_location_floor.as_deref(),
        note: v.note.as_deref(),
    }
}

fn load_date(date: Option<String>) -> Result<Option<time::Date>> {
    date.map(|d| {
        parse_date(&d).map_err(|err| anyhow!("Invalid stored date '{d}': {err}").into())
    })
    .transpose()
}

fn load_battery_level(level: Option<i16>) -> Result<Option<BatteryLevel>> {
    level
        .map(|l| {
            BatteryLevel::try_new(f64::from(l))
                .ok_or_else(|| anyhow!("Invalid battery level: {l}").into())
        })
        .transpose()
}

fn load_booking(e: models::BookingEntity) -> Result<Booking> {
    let models::BookingEntity {
        rowid: _,
        id,
        kind,
        station_id,
        booked_by,
        created_at,
        date,
        start_time,
        end_time,
        message,
        contact_number,
        status,
        date_leave,
        time_leave,
        current_battery_level,
        desired_battery_level,
        park_location_spot_id,
        send_sms_on_complete,
        site_picker,
        vehicle_model,
        vehicle_license_plate,
        vehicle_year,
        vehicle_color,
        vehicle_driver_full_name,
        dial_code,
        vehicle_driver_phone_number,
        park_location_floor,
        note,
    } = e;
    let vehicle_year = vehicle_year
        .map(|y| u16::try_from(y).map_err(|_| anyhow!("Invalid vehicle year: {y}")))
        .transpose()?;
    let vehicle = VehicleDetails {
        date_leave: load_date(date_leave)?,
        time_leave,
        current_battery_level: load_battery_level(current_battery_level)?,
        desired_battery_level: load_battery_level(desired_battery_level)?,
        park_location_spot_id,
        send_sms_on_complete,
        site_picker,
        vehicle_model,
        vehicle_license_plate,
        vehicle_year,
        vehicle_color,
        vehicle_driver_full_name,
        dial_code,
        vehicle_driver_phone_number,
        park_location_floor,
        note,
    };
    Ok(Booking {
        id: id.into(),
        kind: load_charger_kind(kind)?,
        station_id: station_id.into(),
        booked_by: booked_by.map(Into::into),
        created_at: Timestamp::from_millis(created_at),
        date: load_date(date)?,
        start_time: start_time.map(Timestamp::from_millis),
        end_time: end_time.map(Timestamp::from_millis),
        message,
        contact_number,
        status: BookingStatus::try_new(status).unwrap_or_default(),
        vehicle,
    })
}

fn load_bookings(entities: Vec<models::BookingEntity>) -> Result<Vec<Booking>> {
    entities.into_iter().map(load_booking).collect()
}

fn create_booking(conn: &mut SqliteConnection, b: &Booking) -> Result<()> {
    diesel::insert_into(schema::booking::table)
        .values(&new_booking(b))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn update_booking(conn: &mut SqliteConnection, b: &Booking) -> Result<()> {
    use schema::booking::dsl;
    let count = diesel::update(dsl::booking.filter(dsl::id.eq(b.id.as_str())))
        .set(&new_booking(b))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_booking(conn: &mut SqliteConnection, id: &Id) -> Result<()> {
    use schema::booking::dsl;
    let count = diesel::delete(dsl::booking.filter(dsl::id.eq(id.as_str())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_booking(conn: &mut SqliteConnection, id: &Id) -> Result<Booking> {
    use schema::booking::dsl;
    let entity = dsl::booking
        .filter(dsl::id.eq(id.as_str()))
        .first::<models::BookingEntity>(conn)
        .map_err(from_diesel_err)?;
    load_booking(entity)
}

fn all_bookings(conn: &mut SqliteConnection, kind: Option<ChargerKind>) -> Result<Vec<Booking>> {
    use schema::booking::dsl;
    let mut query = dsl::booking.order_by(dsl::rowid).into_boxed();
    if let Some(kind) = kind {
        query = query.filter(dsl::kind.eq(store_charger_kind(kind)));
    }
    load_bookings(
        query
            .load::<models::BookingEntity>(conn)
            .map_err(from_diesel_err)?,
    )
}

fn bookings_of_station(conn: &mut SqliteConnection, station_id: &Id) -> Result<Vec<Booking>> {
    use schema::booking::dsl;
    load_bookings(
        dsl::booking
            .filter(dsl::station_id.eq(station_id.as_str()))
            .order_by(dsl::rowid)
            .load::<models::BookingEntity>(conn)
            .map_err(from_diesel_err)?,
    )
}

fn bookings_of_user(conn: &mut SqliteConnection, user_id: &Id) -> Result<Vec<Booking>> {
    use schema::booking::dsl;
    load_bookings(
        dsl::booking
            .filter(dsl::booked_by.eq(user_id.as_str()))
            .order_by(dsl::rowid)
            .load::<models::BookingEntity>(conn)
            .map_err(from_diesel_err)?,
    )
}
